use once_cell::sync::Lazy;
use regex::Regex;

pub const PASSWORD_RULE_MESSAGE: &str =
    "A senha deve ter pelo menos 8 caracteres, uma letra maiúscula, um número e um símbolo.";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static UPPERCASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern is valid"));

static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[!@#$%^&*()_\-+=<>?{}\[\]~|\\:;"',./`]"#).expect("symbol pattern is valid")
});

/// Registration inputs as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    fn has_blank_field(&self) -> bool {
        [&self.name, &self.email, &self.password, &self.confirm_password]
            .iter()
            .any(|v| v.trim().is_empty())
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err("Email inválido.".into())
    }
}

fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && UPPERCASE_RE.is_match(password)
        && DIGIT_RE.is_match(password)
        && SYMBOL_RE.is_match(password)
}

fn validate_confirmation(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("As senhas não coincidem.".into());
    }
    Ok(())
}

/// Public sign-up: every field, valid email, matching and strong password
pub fn validate_registration(form: &RegistrationForm) -> Result<(), String> {
    if form.has_blank_field() {
        return Err("Todos os campos são obrigatórios.".into());
    }
    validate_email(&form.email)?;
    validate_confirmation(&form.password, &form.confirm_password)?;
    if !is_strong_password(&form.password) {
        return Err(PASSWORD_RULE_MESSAGE.into());
    }
    Ok(())
}

/// Admin-side account creation; the password strength is left to the backend
pub fn validate_user_creation(form: &RegistrationForm) -> Result<(), String> {
    if form.has_blank_field() {
        return Err("Todos os campos são obrigatórios.".into());
    }
    validate_email(&form.email)?;
    validate_confirmation(&form.password, &form.confirm_password)
}

pub fn validate_password_reset(password: &str, confirm: &str) -> Result<(), String> {
    validate_confirmation(password, confirm)?;
    if !is_strong_password(password) {
        return Err(PASSWORD_RULE_MESSAGE.into());
    }
    Ok(())
}

/// Login error returned for accounts still waiting for email activation
pub fn is_not_activated_message(message: &str) -> bool {
    message.contains("não foi ativada")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Ana".into(),
            email: "ana@menument.pt".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@menument.pt").is_ok());
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("ana@menument").is_err());
        assert!(validate_email("ana menument@x.pt").is_err());
        assert!(validate_email("@x.pt").is_err());
        assert!(validate_email("ana@@x.pt").is_err());
    }

    #[test]
    fn test_registration_rules_in_order() {
        let mut blank = form("Segura#123", "Segura#123");
        blank.name.clear();
        assert_eq!(
            validate_registration(&blank),
            Err("Todos os campos são obrigatórios.".to_string())
        );

        let mut bad_email = form("Segura#123", "Segura#123");
        bad_email.email = "ana".into();
        assert_eq!(validate_registration(&bad_email), Err("Email inválido.".to_string()));

        assert_eq!(
            validate_registration(&form("Segura#123", "Segura#124")),
            Err("As senhas não coincidem.".to_string())
        );
        assert_eq!(
            validate_registration(&form("segura#123", "segura#123")),
            Err(PASSWORD_RULE_MESSAGE.to_string())
        );
        assert_eq!(validate_registration(&form("Segura#123", "Segura#123")), Ok(()));
    }

    #[test]
    fn test_password_strength() {
        assert!(is_strong_password("Abcdef1!"));
        assert!(!is_strong_password("Abcde1!"));
        assert!(!is_strong_password("Abcdefg1"));
        assert!(!is_strong_password("abcdef1!"));
        assert!(!is_strong_password("Abcdefg!"));
    }

    #[test]
    fn test_user_creation_skips_strength() {
        assert_eq!(validate_user_creation(&form("fraca", "fraca")), Ok(()));
        assert!(validate_user_creation(&form("fraca", "forte")).is_err());
    }

    #[test]
    fn test_password_reset() {
        assert!(validate_password_reset("Nova#2024", "Nova#2024").is_ok());
        assert_eq!(
            validate_password_reset("Nova#2024", "Nova#2025"),
            Err("As senhas não coincidem.".to_string())
        );
        assert_eq!(
            validate_password_reset("nova", "nova"),
            Err(PASSWORD_RULE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_not_activated_message() {
        assert!(is_not_activated_message("A conta ainda não foi ativada."));
        assert!(!is_not_activated_message("Credenciais inválidas"));
    }
}
