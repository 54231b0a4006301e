//! The installer flow: detect, ask, write, start.
//!
//! Every prompt is answered before the first backup or write happens.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::collect;
use crate::app::commands::stack::{self, StackStatus};
use crate::domain::env_document::unquote;
use crate::domain::proxy;
use crate::domain::settings::keys;
use crate::domain::{AppError, EnvDocument, Messages, SiteSettings, synthesize_layered};
use crate::ports::{Orchestrator, Prompter};
use crate::services::env_file;
use crate::services::install_state::{self, InstallState};
use crate::services::{backup, backup_if_present};

/// Result of a completed installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// An existing installation was started without changes.
    StartedExisting { stack: StackStatus },
    /// Configuration was (re)written.
    Configured(ConfigureReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureReport {
    pub env_file: PathBuf,
    pub proxy_file: Option<PathBuf>,
    /// Backup artifacts created during this run.
    pub backups: Vec<PathBuf>,
    pub stack: StackStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExistingAction {
    Start,
    Reconfigure,
    Cancel,
}

/// Rewritten proxy configuration waiting to be written.
struct ProxyPlan {
    output: PathBuf,
    content: String,
}

pub fn execute<P: Prompter, O: Orchestrator>(
    ctx: &AppContext<P, O>,
) -> Result<InstallOutcome, AppError> {
    let config = ctx.config();
    let env_path = ctx.resolve(&config.paths.env_file);
    let data_dirs: Vec<PathBuf> =
        config.paths.data_dirs.iter().map(|d| ctx.resolve(d)).collect();
    let state = install_state::detect(&env_path, &data_dirs);
    tracing::info!("install state: {:?}", state);

    // Fail before the first prompt when there is nothing else to offer.
    let preloaded = if state.can_start_existing() {
        None
    } else {
        Some(env_file::load_template(&ctx.resolve(&config.paths.template))?)
    };

    let language = collect::choose_language(ctx.prompter())?;
    let messages = language.messages();

    let data_to_backup = match &state {
        InstallState::Configured { populated_data_dirs } if !populated_data_dirs.is_empty() => {
            match prompt_existing_action(ctx.prompter(), messages)? {
                ExistingAction::Start => return start_existing(ctx, messages),
                ExistingAction::Reconfigure => {}
                ExistingAction::Cancel => return Err(AppError::Cancelled),
            }
            if ctx.prompter().confirm(messages.backup_data_dirs, true)? {
                populated_data_dirs.clone()
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    };

    let template = match preloaded {
        Some(template) => template,
        None => env_file::load_template(&ctx.resolve(&config.paths.template))?,
    };
    let persisted = env_file::load_persisted(&env_path)?;

    let settings = collect::collect(ctx.prompter(), language, &config.credentials)?;
    let proxy_plan = plan_proxy(ctx, &settings.site)?;

    let available = stack::check_available(ctx, messages)?;
    let start_requested = available && ctx.prompter().confirm(messages.start_now, true)?;

    let ssl_requested = settings.site.ssl_requested();
    let document = synthesize_layered(template, persisted.as_ref(), settings.into_overrides());
    if let Some(domain) = kept_domain(ssl_requested, &document) {
        ctx.prompter().say(&format!("{} {}", messages.domain_kept, domain));
    }

    let mut backups = Vec::new();
    for dir in &data_to_backup {
        let moved = backup(dir)?;
        report_backup(ctx, messages, &moved);
        backups.push(moved);
    }

    if let Some(previous) = backup_if_present(&env_path)? {
        report_backup(ctx, messages, &previous);
        backups.push(previous);
    }
    env_file::write_private(&env_path, &document.render())?;
    ctx.prompter().say(&format!("{} {}", messages.env_written, env_path.display()));

    let proxy_file = match proxy_plan {
        Some(plan) => {
            if let Some(previous) = backup_if_present(&plan.output)? {
                report_backup(ctx, messages, &previous);
                backups.push(previous);
            }
            env_file::write_public(&plan.output, &plan.content)?;
            let written = format!("{} {}", messages.proxy_written, plan.output.display());
            ctx.prompter().say(&written);
            Some(plan.output)
        }
        None => None,
    };

    let stack = if start_requested {
        stack::start(ctx, messages)?
    } else if available {
        stack::print_manual_instructions(ctx, messages);
        StackStatus::Skipped
    } else {
        StackStatus::Unavailable
    };

    Ok(InstallOutcome::Configured(ConfigureReport {
        env_file: env_path,
        proxy_file,
        backups,
        stack,
    }))
}

/// Domain still configured after a run where none was entered.
fn kept_domain(ssl_requested: bool, document: &EnvDocument) -> Option<String> {
    if ssl_requested {
        return None;
    }
    let domain = unquote(document.get(keys::DOMAIN)?);
    (!domain.is_empty()).then_some(domain)
}

fn start_existing<P: Prompter, O: Orchestrator>(
    ctx: &AppContext<P, O>,
    messages: &Messages,
) -> Result<InstallOutcome, AppError> {
    let stack = if stack::check_available(ctx, messages)? {
        stack::start(ctx, messages)?
    } else {
        StackStatus::Unavailable
    };
    Ok(InstallOutcome::StartedExisting { stack })
}

fn report_backup<P: Prompter, O: Orchestrator>(
    ctx: &AppContext<P, O>,
    messages: &Messages,
    path: &Path,
) {
    ctx.prompter().say(&format!("{} {}", messages.backed_up, path.display()));
}

fn prompt_existing_action<P: Prompter>(
    prompter: &P,
    messages: &Messages,
) -> Result<ExistingAction, AppError> {
    let actions = [ExistingAction::Start, ExistingAction::Reconfigure, ExistingAction::Cancel];
    let items = [messages.start_existing, messages.reconfigure, messages.cancel];
    let index = prompter.select(messages.existing_install, &items, 0)?;
    actions
        .get(index)
        .copied()
        .ok_or_else(|| AppError::prompt_error(format!("selection {} out of range", index)))
}

/// Read and rewrite the proxy template when SSL is requested.
fn plan_proxy<P: Prompter, O: Orchestrator>(
    ctx: &AppContext<P, O>,
    site: &SiteSettings,
) -> Result<Option<ProxyPlan>, AppError> {
    let SiteSettings::Ssl { domain, email, .. } = site else {
        return Ok(None);
    };
    let proxy_config = &ctx.config().proxy;
    let template = env_file::read_text(&ctx.resolve(&proxy_config.template))?;
    let content = proxy::rewrite(&template, domain, email, &proxy_config.placeholders());
    Ok(Some(ProxyPlan { output: ctx.resolve(&proxy_config.output), content }))
}
