use std::io::{self, BufRead, Write};

/// Boundary for credential verification in front of the chat view.
pub trait CredentialVerifier {
    fn verify(&self, identifier: &str, secret: &str) -> bool;
}

/// Verifies against a credential pair supplied via the environment at
/// startup (`MEMECHAT_LOGIN_EMAIL` / `MEMECHAT_LOGIN_PASSWORD`).
///
/// With no configured credentials the gate is open: this is a single-user
/// local client, so an absent login policy means "no login".
pub struct EnvCredentialVerifier {
    identifier: Option<String>,
    secret: Option<String>,
}

impl EnvCredentialVerifier {
    pub fn from_env() -> Self {
        Self {
            identifier: std::env::var("MEMECHAT_LOGIN_EMAIL").ok(),
            secret: std::env::var("MEMECHAT_LOGIN_PASSWORD").ok(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.identifier.is_some() && self.secret.is_some()
    }
}

impl CredentialVerifier for EnvCredentialVerifier {
    fn verify(&self, identifier: &str, secret: &str) -> bool {
        match (&self.identifier, &self.secret) {
            (Some(expected_id), Some(expected_secret)) => {
                expected_id == identifier && expected_secret == secret
            }
            _ => false,
        }
    }
}

/// Blocking login prompt. Returns `Ok(true)` once a credential pair is
/// accepted and `Ok(false)` on end of input.
pub fn run_login_gate(
    verifier: &EnvCredentialVerifier,
    input: &mut impl BufRead,
) -> io::Result<bool> {
    if !verifier.is_configured() {
        return Ok(true);
    }

    loop {
        let Some(identifier) = prompt_line(input, "Email: ")? else {
            return Ok(false);
        };
        let Some(secret) = prompt_line(input, "Password: ")? else {
            return Ok(false);
        };
        if verifier.verify(identifier.trim(), secret.trim()) {
            println!("✅ Login successful!");
            return Ok(true);
        }
        println!("❌ Invalid email or password.");
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn configured() -> EnvCredentialVerifier {
        EnvCredentialVerifier {
            identifier: Some("chaima@gmail.com".to_string()),
            secret: Some("123456".to_string()),
        }
    }

    #[test]
    fn verifier_accepts_the_configured_pair() {
        assert!(configured().verify("chaima@gmail.com", "123456"));
    }

    #[test]
    fn verifier_rejects_a_mismatch() {
        let verifier = configured();
        assert!(!verifier.verify("chaima@gmail.com", "wrong"));
        assert!(!verifier.verify("someone@else.com", "123456"));
    }

    #[test]
    fn unconfigured_gate_is_open() {
        let verifier = EnvCredentialVerifier {
            identifier: None,
            secret: None,
        };
        let mut input = Cursor::new(Vec::new());

        assert!(run_login_gate(&verifier, &mut input).expect("gate"));
    }

    #[test]
    fn gate_retries_until_the_pair_matches() {
        let verifier = configured();
        let mut input = Cursor::new(b"wrong@x.com\nbad\nchaima@gmail.com\n123456\n".to_vec());

        assert!(run_login_gate(&verifier, &mut input).expect("gate"));
    }

    #[test]
    fn gate_gives_up_on_end_of_input() {
        let verifier = configured();
        let mut input = Cursor::new(b"wrong@x.com\n".to_vec());

        assert!(!run_login_gate(&verifier, &mut input).expect("gate"));
    }
}
