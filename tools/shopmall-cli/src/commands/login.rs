//! Login form.

use anyhow::{bail, Result};

use super::LoginArgs;
use crate::context::Context;
use crate::login::{LoginForm, LoginId};

/// Run the login command.
pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let id = match (args.email, args.phone) {
        (Some(email), _) => LoginId::Email(email),
        (None, Some(phone)) => LoginId::Phone(phone),
        (None, None) => bail!("Either --email or --phone is required"),
    };
    let form = LoginForm {
        id,
        password: args.password,
        remember_me: args.remember_me,
    };

    match form.validate() {
        Ok(()) => {
            tracing::info!(remember_me = form.remember_me, "login form accepted");
            if ctx.output.is_json() {
                ctx.output
                    .json(&serde_json::json!({ "accepted": true, "form": form }));
            } else {
                ctx.output.success("Login details look good");
                ctx.output
                    .info("There is no account service yet, so nothing was signed in.");
            }
            Ok(())
        }
        Err(errors) => {
            if ctx.output.is_json() {
                ctx.output
                    .json(&serde_json::json!({ "accepted": false, "errors": errors }));
            } else {
                ctx.output.header("Please fix the following");
                for error in &errors {
                    ctx.output.list_item(&format!("{}: {}", error.field, error.message));
                }
            }
            bail!("Login form has {} error(s)", errors.len())
        }
    }
}
