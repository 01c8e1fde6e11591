//! CLI tool to preview the JSON a site form would submit.
//!
//! Usage:
//!   deli-payload recipe <form.txt> [--user-id N]
//!   deli-payload feedback <form.txt> [--user-id N]
//!   deli-payload register <form.txt>
//!   deli-payload categories
//!
//! Form files hold one `name=value` per line, as the browser would post them.

use clap::{Parser, Subcommand};
use serde::Serialize;
use shei_deli::{
    Category, ClientConfig, Endpoint, FeedbackPayload, FieldMap, RecipePayload,
    RegistrationPayload,
};
use std::fs;
use std::process;

/// Show the request body a recipe-site form produces.
#[derive(Parser)]
#[command(name = "deli-payload")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show the target endpoint and form file on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Body of the new-recipe form
    Recipe {
        /// Form dump (name=value per line)
        form: String,
        /// Submitting user instead of the placeholder
        #[arg(long)]
        user_id: Option<u64>,
    },
    /// Body of the feedback form
    Feedback {
        form: String,
        #[arg(long)]
        user_id: Option<u64>,
    },
    /// Body of the registration form
    Register { form: String },
    /// List recipe categories
    Categories,
}

fn read_form(path: &str) -> FieldMap {
    match fs::read_to_string(path) {
        Ok(content) => FieldMap::parse(&content),
        Err(e) => {
            eprintln!("Error reading form file '{path}': {e}");
            process::exit(1);
        }
    }
}

fn config_for(user_id: Option<u64>) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(id) = user_id {
        config.user_id = id;
    }
    config
}

fn print_json(payload: &impl Serialize) {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error encoding payload: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let (endpoint, form_path) = match &cli.command {
        Command::Recipe { form, .. } => (Endpoint::Recipes, form.as_str()),
        Command::Feedback { form, .. } => (Endpoint::Feedback, form.as_str()),
        Command::Register { form } => (Endpoint::Register, form.as_str()),
        Command::Categories => {
            for category in Category::ALL {
                println!("{:<18} {}", category.key(), category.display_name());
            }
            return;
        }
    };

    let fields = read_form(form_path);

    match &cli.command {
        Command::Recipe { user_id, .. } => {
            let config = config_for(*user_id);
            if cli.verbose {
                eprintln!("POST {}", config.url(endpoint.path()));
                eprintln!("Form: {form_path}");
            }
            print_json(&RecipePayload::from_form(&fields, &config));
        }
        Command::Feedback { user_id, .. } => {
            let config = config_for(*user_id);
            if cli.verbose {
                eprintln!("POST {}", config.url(endpoint.path()));
                eprintln!("Form: {form_path}");
            }
            print_json(&FeedbackPayload::from_form(&fields, &config));
        }
        Command::Register { .. } => {
            if cli.verbose {
                eprintln!("POST {}", ClientConfig::default().url(endpoint.path()));
                eprintln!("Form: {form_path}");
            }
            match RegistrationPayload::from_form(&fields) {
                Ok(payload) => print_json(&payload),
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            }
        }
        Command::Categories => {}
    }
}
