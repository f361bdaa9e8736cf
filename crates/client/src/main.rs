//! `folio-client` -- interactive terminal front end for the folio API.
//!
//! Fetches the full project list once at startup, then serves a command
//! loop. Searching filters locally without touching the server; create,
//! edit, and delete go through the API and update local state only after
//! the server confirms.
//!
//! # Environment variables
//!
//! | Variable        | Required | Description                                    |
//! |-----------------|----------|------------------------------------------------|
//! | `FOLIO_API_URL` | yes      | API base address, e.g. `http://localhost:3000` |

use std::io::{self, Write};

use folio_client::api::ApiClient;
use folio_client::controller::Controller;
use folio_client::form::ProjectForm;
use folio_client::view;
use folio_core::types::DbId;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // No fallback: the API address is configuration, not a compiled-in
    // constant.
    let base_url = std::env::var("FOLIO_API_URL").unwrap_or_else(|_| {
        tracing::error!("FOLIO_API_URL environment variable is required");
        std::process::exit(1);
    });

    let mut controller = Controller::new(ApiClient::new(base_url));

    println!("Project Portfolio");
    println!("Type `help` for the command list.\n");

    println!("Loading projects...");
    controller.refresh().await;
    flush_notice(&mut controller);
    show(&controller);

    loop {
        let line = prompt("> ");
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "list" => {
                controller.set_search_term("");
                show(&controller);
            }
            "search" => {
                controller.set_search_term(rest);
                show(&controller);
            }
            "refresh" => {
                controller.refresh().await;
                flush_notice(&mut controller);
                show(&controller);
            }
            "add" => {
                run_form(&mut controller, None, ProjectForm::default()).await;
                flush_notice(&mut controller);
                show(&controller);
            }
            "edit" => match rest.parse::<DbId>() {
                Ok(id) => {
                    let form = controller.find(id).map(ProjectForm::from_project);
                    match form {
                        Some(form) => {
                            run_form(&mut controller, Some(id), form).await;
                            flush_notice(&mut controller);
                            show(&controller);
                        }
                        None => println!("No project with id {id}."),
                    }
                }
                Err(_) => println!("usage: edit <id>"),
            },
            "delete" => match rest.parse::<DbId>() {
                Ok(id) => {
                    if confirm(&format!("Are you sure you want to delete project {id}?")) {
                        controller.delete(id).await;
                        flush_notice(&mut controller);
                        show(&controller);
                    } else {
                        println!("Cancelled.");
                    }
                }
                Err(_) => println!("usage: delete <id>"),
            },
            "open" => match rest.parse::<DbId>() {
                Ok(id) => match controller.find(id) {
                    Some(project) if !project.github_link.is_empty() => {
                        println!("{}", project.github_link);
                    }
                    Some(_) => println!("Project {id} has no GitHub link."),
                    None => println!("No project with id {id}."),
                },
                Err(_) => println!("usage: open <id>"),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command `{other}`. Type `help` for the command list."),
        }
    }
}

/// Run the create/edit form until the submission succeeds or the user
/// abandons it. On a server rejection the entered values are kept and the
/// form re-opens with the error shown, mirroring a modal that stays open.
async fn run_form(controller: &mut Controller, editing: Option<DbId>, mut form: ProjectForm) {
    println!("Enter fields (empty input keeps the shown value, `-` clears it):");

    loop {
        form.title = prompt_with_default("Title", &form.title);
        form.description = prompt_with_default("Description", &form.description);
        form.tech_stack = prompt_with_default("Tech stack (comma-separated)", &form.tech_stack);
        form.github_link = prompt_with_default("GitHub link", &form.github_link);

        let errors = form.validate();
        if !errors.is_empty() {
            println!("{}", view::render_field_errors(&errors));
            if confirm("Edit the form again?") {
                continue;
            }
            println!("Cancelled.");
            break;
        }

        let draft = form.to_draft();
        println!("Saving...");

        let result = match editing {
            Some(id) => controller.update(id, &draft).await,
            None => controller.create(&draft).await,
        };

        match result {
            Ok(()) => break,
            Err(err) => {
                println!("[error] {err}");
                if !confirm("Try again?") {
                    break;
                }
            }
        }
    }
}

fn show(controller: &Controller) {
    println!(
        "{}",
        view::render_projects(
            controller.filtered(),
            controller.search_term(),
            controller.is_loading(),
        )
    );
}

fn flush_notice(controller: &mut Controller) {
    if let Some(notice) = controller.notice() {
        println!("{}", view::render_notice(notice));
    }
    controller.dismiss_notice();
}

fn print_help() {
    println!("Commands:");
    println!("  list           show all projects (clears the search)");
    println!("  search <term>  filter by title, description, or tech stack");
    println!("  add            create a new project");
    println!("  edit <id>      edit an existing project");
    println!("  delete <id>    delete a project (asks for confirmation)");
    println!("  open <id>      print a project's GitHub link");
    println!("  refresh        re-fetch the list from the server");
    println!("  quit           exit");
}

/// Print a prompt and read one line from stdin. EOF exits cleanly.
fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().expect("Failed to flush stdout");

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .expect("Failed to read input");
    if read == 0 {
        println!();
        std::process::exit(0);
    }
    line.trim_end_matches(['\r', '\n']).to_string()
}

/// Prompt for a field, keeping the current value on empty input and
/// clearing it on `-`.
fn prompt_with_default(label: &str, current: &str) -> String {
    let entered = if current.is_empty() {
        prompt(&format!("{label}: "))
    } else {
        prompt(&format!("{label} [{current}]: "))
    };

    match entered.as_str() {
        "" => current.to_string(),
        "-" => String::new(),
        _ => entered,
    }
}

/// Ask a yes/no question, defaulting to no.
fn confirm(question: &str) -> bool {
    let answer = prompt(&format!("{question} [y/N]: "));
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}
