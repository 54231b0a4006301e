//! Interactive collection of installer settings.

use crate::domain::credentials::{generate_password, random_port};
use crate::domain::installer_config::CredentialsConfig;
use crate::domain::language::{LANGUAGE_MENU, LANGUAGE_PROMPT};
use crate::domain::{
    AdminSettings, AppError, CollectedSettings, DatabaseSettings, Language, Messages,
    SiteSettings,
};
use crate::ports::Prompter;

/// Ask for the language until a valid choice is entered.
pub fn choose_language<P: Prompter>(prompter: &P) -> Result<Language, AppError> {
    prompter.say(LANGUAGE_MENU);
    loop {
        let answer = prompter.input(LANGUAGE_PROMPT)?;
        if let Some(language) = Language::from_choice(&answer) {
            return Ok(language);
        }
    }
}

/// Run the site, database and admin questions in order.
pub fn collect<P: Prompter>(
    prompter: &P,
    language: Language,
    credentials: &CredentialsConfig,
) -> Result<CollectedSettings, AppError> {
    let messages = language.messages();
    let site = collect_site(prompter, messages, credentials.default_http_port)?;
    let database = collect_database(prompter, messages, credentials.database_password_length)?;
    let admin = collect_admin(prompter, messages, credentials)?;
    Ok(CollectedSettings { language, site, database, admin })
}

fn collect_site<P: Prompter>(
    prompter: &P,
    messages: &Messages,
    default_port: u16,
) -> Result<SiteSettings, AppError> {
    let domain = prompter.input(messages.domain)?;
    if domain.is_empty() {
        let port = prompt_port(prompter, messages, default_port)?;
        return Ok(SiteSettings::Plain { port });
    }

    let email = prompter.input(messages.ssl_email)?;
    Ok(SiteSettings::Ssl { domain, internal_port: random_port(), email })
}

fn prompt_port<P: Prompter>(
    prompter: &P,
    messages: &Messages,
    default_port: u16,
) -> Result<u16, AppError> {
    let prompt = format!("{} [{}]", messages.http_port, default_port);
    loop {
        let answer = prompter.input(&prompt)?;
        if answer.is_empty() {
            return Ok(default_port);
        }
        match answer.parse::<u16>() {
            Ok(port) if port > 0 => return Ok(port),
            _ => prompter.say(messages.invalid_port),
        }
    }
}

fn collect_database<P: Prompter>(
    prompter: &P,
    messages: &Messages,
    password_length: usize,
) -> Result<DatabaseSettings, AppError> {
    // Declining leaves every database key as it is, so existing data stays reachable.
    if !prompter.confirm(messages.customize_database, false)? {
        return Ok(DatabaseSettings::unchanged());
    }

    let root_password =
        or_generated(prompter.password(messages.database_root_password)?, password_length)?;
    let database = prompter.input(messages.database_name)?;
    let user = prompter.input(messages.database_user)?;
    let password = or_generated(prompter.password(messages.database_password)?, password_length)?;

    Ok(DatabaseSettings { root_password, database, user, password })
}

fn or_generated(answer: String, length: usize) -> Result<String, AppError> {
    if answer.is_empty() { generate_password(length) } else { Ok(answer) }
}

fn collect_admin<P: Prompter>(
    prompter: &P,
    messages: &Messages,
    credentials: &CredentialsConfig,
) -> Result<AdminSettings, AppError> {
    let user_prompt = format!("{} [{}]", messages.admin_user, credentials.default_admin_user);
    let mut user = prompter.input(&user_prompt)?;
    if user.is_empty() {
        user = credentials.default_admin_user.clone();
    }

    loop {
        match prompt_password_pair(prompter, messages) {
            Ok(Some(password)) => {
                return Ok(AdminSettings { user, password, generated_password: false });
            }
            Ok(None) => {
                let password = generate_password(credentials.admin_password_length)?;
                prompter.say(&format!("{} {}", messages.generated_password, password));
                return Ok(AdminSettings { user, password, generated_password: true });
            }
            Err(AppError::ConfirmationMismatch) => prompter.say(messages.password_mismatch),
            Err(err) => return Err(err),
        }
    }
}

/// `None` when the operator left the password blank.
fn prompt_password_pair<P: Prompter>(
    prompter: &P,
    messages: &Messages,
) -> Result<Option<String>, AppError> {
    let password = prompter.password(messages.admin_password)?;
    if password.is_empty() {
        return Ok(None);
    }
    let confirmation = prompter.password(messages.admin_password_confirm)?;
    if password != confirmation {
        return Err(AppError::ConfirmationMismatch);
    }
    Ok(Some(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credentials::INTERNAL_PORT_RANGE;
    use crate::testing::ScriptedPrompter;

    fn english() -> &'static Messages {
        Language::English.messages()
    }

    #[test]
    fn language_reprompts_until_valid() {
        let prompter = ScriptedPrompter::new().inputs(["", "7", "fr", "2"]);

        let language = choose_language(&prompter).unwrap();

        assert_eq!(language, Language::TraditionalChinese);
        assert_eq!(prompter.prompts.borrow().len(), 4);
    }

    #[test]
    fn blank_domain_prompts_for_port_with_default() {
        let prompter = ScriptedPrompter::new().inputs(["", ""]);

        let site = collect_site(&prompter, english(), 8080).unwrap();

        assert_eq!(site, SiteSettings::Plain { port: 8080 });
    }

    #[test]
    fn invalid_port_is_reprompted() {
        let prompter = ScriptedPrompter::new().inputs(["", "http", "0", "70000", "9090"]);

        let site = collect_site(&prompter, english(), 8080).unwrap();

        assert_eq!(site, SiteSettings::Plain { port: 9090 });
        assert_eq!(prompter.count_said(english().invalid_port), 3);
    }

    #[test]
    fn domain_uses_internal_port_and_optional_email() {
        let prompter = ScriptedPrompter::new().inputs(["shop.example.org", ""]);

        let site = collect_site(&prompter, english(), 8080).unwrap();

        match site {
            SiteSettings::Ssl { domain, internal_port, email } => {
                assert_eq!(domain, "shop.example.org");
                assert!(INTERNAL_PORT_RANGE.contains(&internal_port));
                assert_eq!(email, "");
            }
            other => panic!("expected SSL site, got {:?}", other),
        }
        assert!(!prompter.prompts.borrow().iter().any(|p| p.starts_with(english().http_port)));
    }

    #[test]
    fn declined_database_customization_changes_nothing() {
        let prompter = ScriptedPrompter::new().confirms([false]);

        let database = collect_database(&prompter, english(), 13).unwrap();

        assert_eq!(database, DatabaseSettings::unchanged());
        assert_eq!(database.root_password, "");
        assert_eq!(database.password, "");
        assert_eq!(prompter.prompts.borrow().len(), 1);
    }

    #[test]
    fn blank_database_answers_follow_policy() {
        let prompter =
            ScriptedPrompter::new().confirms([true]).passwords(["", "typed"]).inputs(["", "shop"]);

        let database = collect_database(&prompter, english(), 13).unwrap();

        assert_eq!(database.root_password.len(), 13);
        assert_eq!(database.database, "");
        assert_eq!(database.user, "shop");
        assert_eq!(database.password, "typed");
    }

    #[test]
    fn blank_admin_user_gets_default_and_password_is_generated() {
        let prompter = ScriptedPrompter::new().inputs([""]).passwords([""]);

        let admin = collect_admin(&prompter, english(), &CredentialsConfig::default()).unwrap();

        assert_eq!(admin.user, "admin");
        assert!(admin.generated_password);
        assert_eq!(admin.password.len(), 11);
        assert!(prompter.said_containing(&admin.password));
    }

    #[test]
    fn mismatched_confirmation_reprompts_whole_pair_once() {
        let prompter =
            ScriptedPrompter::new().inputs(["operator"]).passwords(["abc", "xyz", "abc", "abc"]);

        let admin = collect_admin(&prompter, english(), &CredentialsConfig::default()).unwrap();

        assert_eq!(admin.user, "operator");
        assert_eq!(admin.password, "abc");
        assert!(!admin.generated_password);
        assert_eq!(prompter.count_said(english().password_mismatch), 1);
        let password_prompts = prompter
            .prompts
            .borrow()
            .iter()
            .filter(|p| *p == english().admin_password)
            .count();
        assert_eq!(password_prompts, 2);
    }

    #[test]
    fn collect_runs_every_section() {
        let prompter = ScriptedPrompter::new()
            .inputs(["", "8081", ""])
            .confirms([false])
            .passwords(["s3cret", "s3cret"]);

        let settings =
            collect(&prompter, Language::English, &CredentialsConfig::default()).unwrap();

        assert_eq!(settings.site, SiteSettings::Plain { port: 8081 });
        assert_eq!(settings.admin.user, "admin");
        assert_eq!(settings.admin.password, "s3cret");
    }

    #[test]
    fn exhausted_script_surfaces_error() {
        let prompter = ScriptedPrompter::new();
        assert!(matches!(choose_language(&prompter), Err(AppError::Prompt(_))));
    }
}
