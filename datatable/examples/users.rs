//! Users Table Example
//!
//! Drives a table view the way a UI would: header clicks sort, row clicks
//! select, and the body is printed after every event.

use std::error::Error;
use std::fs::File;

use datatable::{CellValue, TableBody, TableConfig, TableRow, TableView, cell_text};
use simplelog::{Config, LevelFilter, WriteLogger};

/// A user record for the table.
#[derive(Clone, Debug)]
struct User {
    id: u32,
    name: String,
    email: String,
    age: u32,
}

impl TableRow for User {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column_key: &str) -> CellValue {
        match column_key {
            "name" => CellValue::from(&self.name),
            "email" => CellValue::from(&self.email),
            "age" => CellValue::from(self.age),
            _ => CellValue::Empty,
        }
    }
}

const CONFIG: &str = r#"{
    "columns": [
        { "key": "name", "label": "Name", "sortable": true },
        { "key": "email", "label": "Email" },
        { "key": "age", "label": "Age", "sortable": true }
    ],
    "selection": "multi",
    "empty_message": "No users found"
}"#;

fn sample_users() -> Vec<User> {
    let names = ["Charlie", "alice", "Émile", "Bob", "Alice"];
    let ages = [22, 25, 31, 30, 40];

    names
        .iter()
        .zip(ages)
        .enumerate()
        .map(|(i, (name, age))| User {
            id: i as u32 + 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age,
        })
        .collect()
}

fn print_table(view: &TableView<User>, users: &[User]) {
    println!("    {}", view.header_labels().join(" | "));
    match view.body(users) {
        TableBody::Loading => println!("    Loading..."),
        TableBody::Empty(message) => println!("    {}", message),
        TableBody::Rows(rows) => {
            for row in rows {
                let cells: Vec<String> = view
                    .columns()
                    .iter()
                    .map(|column| cell_text(row.record, column))
                    .collect();
                let mark = if row.selected { "■" } else { "□" };
                println!("{}   {}", mark, cells.join(" | "));
            }
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("datatable-users.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut view: TableView<User> = TableConfig::from_json(CONFIG)?.build()?;
    view.subscribe(|event| log::info!("View event: {:?}", event));

    let users = sample_users();
    print_table(&view, &users);

    view.activate_sort("name");
    print_table(&view, &users);

    view.activate_sort("age");
    view.activate_sort("age");
    view.toggle_selection(2);
    view.toggle_selection(5);
    print_table(&view, &users);

    view.set_loading(true);
    print_table(&view, &users);
    view.set_loading(false);
    print_table(&view, &[]);

    Ok(())
}
