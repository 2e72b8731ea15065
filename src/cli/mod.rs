//! Interactive shell around the invoice form. Renders the whole form on
//! every pass and drives edits, uploads, tab switches and submission
//! through the command layer.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::commands::upload::OpenError;
use crate::commands::{form, navigation, upload};
use crate::models::Tab;
use crate::services::navigation::ScrollCommand;
use crate::services::session::{AttachError, SubmitError};
use crate::services::state::AppState;

pub mod output;

pub fn run(state: &mut AppState) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut scroll: Option<ScrollCommand> = None;

    loop {
        render(state, scroll.as_ref());

        if state.session.is_modal_open() {
            confirm_submission(&theme)?;
            form::close_modal(state);
            continue;
        }

        let active = navigation::active_tab(state);
        let actions = [
            "Switch tab".to_string(),
            format!("Edit {}", active.label()),
            "Upload invoice file".to_string(),
            "Open uploaded file".to_string(),
            "Save as Draft".to_string(),
            "Submit & New".to_string(),
            "Quit".to_string(),
        ];
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => scroll = Some(switch_tab(state, &theme)?),
            1 => edit_section(state, &theme)?,
            2 => upload_file(state, &theme)?,
            3 => open_attachment(state),
            4 => {
                form::save_draft(state);
                output::info("Draft kept in the form; nothing was persisted.");
            }
            5 => submit(state),
            _ => break,
        }
    }

    Ok(())
}

fn render(state: &AppState, scroll: Option<&ScrollCommand>) {
    println!();
    output::heading("Create New Invoice");
    println!();
    render_upload_panel(state);
    println!();
    render_tab_strip(state);
    for tab in Tab::all() {
        render_section(state, tab, scroll);
    }
    println!();
}

fn render_upload_panel(state: &AppState) {
    println!("{}", style("Upload Your Invoice").bold());
    output::muted("To auto-populate fields and save time");
    match upload::current_attachment(state) {
        Some(attachment) => {
            output::info(&format!("Uploaded File: {}", attachment.metadata().name))
        }
        None => output::muted("No file uploaded yet."),
    }
}

fn render_tab_strip(state: &AppState) {
    let active = navigation::active_tab(state);
    let cells: Vec<String> = Tab::all()
        .iter()
        .map(|tab| {
            if *tab == active {
                style(format!("[ {} ]", tab.label()))
                    .bold()
                    .cyan()
                    .to_string()
            } else {
                format!("  {}  ", tab.label())
            }
        })
        .collect();
    println!("{}", cells.join(" "));
}

fn render_section(state: &AppState, tab: Tab, scroll: Option<&ScrollCommand>) {
    let jumped = scroll
        .map(|command| command.anchor == tab.anchor())
        .unwrap_or(false);

    println!();
    let marker = if jumped { ">" } else { " " };
    println!("{} {}", marker, style(tab.label()).bold());

    for field in tab.fields() {
        let value = form::field_value(state, *field);
        let shown = if value.is_empty() {
            style("-").dim().to_string()
        } else {
            value
        };
        println!("   {:<22} {}", format!("{}:", field.label()), shown);

        if let Some(message) = state.session.errors().get(*field) {
            println!("   {}", style(message).red());
        }
    }
}

fn confirm_submission(theme: &ColorfulTheme) -> Result<()> {
    println!();
    output::success("Invoice submitted successfully.");
    output::muted("A fresh draft is ready for the next invoice.");
    let _ack: String = Input::<String>::with_theme(theme)
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn switch_tab(state: &mut AppState, theme: &ColorfulTheme) -> Result<ScrollCommand> {
    let tabs = Tab::all();
    let labels: Vec<&str> = tabs.iter().map(|tab| tab.label()).collect();
    let active = navigation::active_tab(state);
    let current = tabs.iter().position(|tab| *tab == active).unwrap_or(0);

    let picked = Select::with_theme(theme)
        .with_prompt("Jump to section")
        .items(&labels)
        .default(current)
        .interact()?;

    Ok(navigation::select_tab(state, tabs[picked]))
}

fn edit_section(state: &mut AppState, theme: &ColorfulTheme) -> Result<()> {
    let tab = navigation::active_tab(state);
    for field in tab.fields() {
        let current = form::field_value(state, *field);
        let entered: String = Input::<String>::with_theme(theme)
            .with_prompt(field.label())
            .with_initial_text(current.as_str())
            .allow_empty(true)
            .interact_text()?;

        if entered == current {
            continue;
        }
        if let Err(error) = form::update_field(state, *field, &entered) {
            output::warning(&error.to_string());
        }
    }
    Ok(())
}

fn upload_file(state: &mut AppState, theme: &ColorfulTheme) -> Result<()> {
    output::muted("PDF, JPEG or PNG up to 5MB.");
    let selection: String = Input::<String>::with_theme(theme)
        .with_prompt("Path to invoice file")
        .allow_empty(true)
        .interact_text()?;

    match upload::upload_file(state, &selection) {
        Ok(metadata) => output::success(&format!("Uploaded File: {}", metadata.name)),
        Err(AttachError::Rejected(error)) => output::warning(&error.to_string()),
        Err(AttachError::Store(error)) => {
            output::error(&format!("Could not record the upload: {error}"))
        }
    }
    Ok(())
}

fn open_attachment(state: &AppState) {
    match upload::open_attachment(state) {
        Ok(stale) => {
            if stale {
                output::warning("The file changed on disk since it was uploaded.");
            }
        }
        Err(OpenError::NoAttachment) => output::info("No attachment to open."),
        Err(error) => output::error(&error.to_string()),
    }
}

fn submit(state: &mut AppState) {
    match form::submit_invoice(state) {
        Ok(()) => {}
        Err(SubmitError::Invalid(errors)) => {
            output::warning(&format!(
                "Submit blocked: {} field(s) need attention.",
                errors.len()
            ));
        }
        Err(SubmitError::Store(error)) => {
            output::error(&format!("Could not persist the invoice: {error}"))
        }
    }
}
