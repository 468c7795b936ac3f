use clap::{Args, Subcommand};

use crate::types::UserForm;

/// Form fields as they arrive from the registration page.
#[derive(Args, Debug, Clone)]
pub struct UserFormArgs {
    #[arg(long, value_name = "NAME", help = "Full name")]
    pub name: String,
    #[arg(long, value_name = "YYYY", help = "Birth year")]
    pub year: String,
    #[arg(long, value_name = "MM", help = "Birth month")]
    pub month: String,
    #[arg(long, value_name = "DD", help = "Birth day")]
    pub day: String,
    #[arg(long, value_name = "PHONE", default_value = "", help = "Phone number")]
    pub tel: String,
    #[arg(long = "type", value_name = "CODE", default_value = "0", help = "Category code")]
    pub category: String,
    #[arg(long, value_name = "TEXT", default_value = "", help = "Free-form comment")]
    pub comment: String,
}

impl From<UserFormArgs> for UserForm {
    fn from(args: UserFormArgs) -> Self {
        UserForm {
            name: args.name,
            year: args.year,
            month: args.month,
            day: args.day,
            tel: args.tel,
            category: args.category,
            comment: args.comment,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum UserCmd {
    #[command(
        about = "Register a new user",
        long_about = "Insert a new user record and print the id the database assigned to it."
    )]
    Insert {
        #[command(flatten)]
        form: UserFormArgs,
    },
    #[command(about = "Show one user by id")]
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },
    #[command(
        about = "Rewrite an existing user",
        long_about = "Replace every field of user ID with the given values and print the stored row."
    )]
    Update {
        #[arg(value_name = "ID")]
        id: i64,
        #[command(flatten)]
        form: UserFormArgs,
    },
    #[command(about = "Delete a user by id and print the removed row")]
    Delete {
        #[arg(value_name = "ID")]
        id: i64,
    },
    #[command(
        about = "Find the first user matching the given fields",
        long_about = "Search by name substring, birth-year substring and exact type. Omitted fields are not applied; with no fields the first user is returned."
    )]
    Search {
        #[arg(long, value_name = "TEXT")]
        name: Option<String>,
        #[arg(long, value_name = "YEAR")]
        year: Option<String>,
        #[arg(long = "type", value_name = "CODE")]
        category: Option<String>,
    },
}

