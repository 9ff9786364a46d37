use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use crate::auth::{issue_token, Claims, Identity, TokenVerifier};
use crate::cli::OutputFormat;
use crate::config::AppConfig;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Sign an HS256 token with JWT_SECRET")]
    Issue {
        #[arg(long, help = "Subject (Supabase user id)")]
        sub: String,
        #[arg(long, help = "Email claim")]
        email: Option<String>,
        #[arg(long, help = "Role claim, e.g. organizer")]
        role: Option<String>,
        #[arg(long, default_value_t = 60, help = "Lifetime in minutes")]
        ttl_minutes: i64,
    },

    #[command(about = "Verify a token and show the identity it yields")]
    Inspect {
        #[arg(help = "Encoded JWT")]
        token: String,
    },
}

fn claims_for(sub: String, email: Option<String>, role: Option<String>, ttl_minutes: i64) -> anyhow::Result<Claims> {
    chrono::Duration::try_minutes(ttl_minutes)
        .and_then(|ttl| Claims::new(sub, email, role, ttl))
        .with_context(|| format!("--ttl-minutes {} is out of range", ttl_minutes))
}

pub fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("JWT_SECRET must be set")?;
    let secret = &config.security.jwt_secret;

    match cmd {
        TokenCommands::Issue {
            sub,
            email,
            role,
            ttl_minutes,
        } => {
            let claims = claims_for(sub, email, role, ttl_minutes)?;
            let token = issue_token(&claims, secret).context("failed to sign token")?;

            match output_format {
                OutputFormat::Json => println!("{}", json!({ "token": token, "claims": claims })),
                OutputFormat::Text => println!("{}", token),
            }
            Ok(())
        }
        TokenCommands::Inspect { token } => {
            let verifier = TokenVerifier::new(secret);

            match verifier.verify(&token) {
                Ok(claims) => {
                    let identity = Identity::from(claims);
                    match output_format {
                        OutputFormat::Json => println!("{}", json!({ "valid": true, "identity": identity })),
                        OutputFormat::Text => {
                            println!("valid");
                            println!("  name:        {}", identity.name);
                            println!("  subject:     {}", identity.subject);
                            println!("  authorities: {}", identity.authorities.join(", "));
                        }
                    }
                    Ok(())
                }
                Err(failure) => {
                    if output_format == OutputFormat::Json {
                        println!("{}", json!({ "valid": false, "error": failure.to_string() }));
                    }
                    anyhow::bail!("{}", failure)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_sets_expiry_after_issue_time() {
        let claims = claims_for("u1".to_string(), None, None, 60).unwrap();
        assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 3600);
    }

    #[test]
    fn huge_ttl_is_an_error() {
        let err = claims_for("u1".to_string(), None, None, i64::MAX).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        assert!(claims_for("u1".to_string(), None, None, i64::MIN).is_err());
    }
}
