#![allow(dead_code)]

use datatable::{CellValue, Column, SelectionMode, TableRow, TableView};

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
}

impl User {
    pub fn new(id: u32, name: &str, age: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age: Some(age),
        }
    }
}

impl TableRow for User {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column_key: &str) -> CellValue {
        match column_key {
            "id" => CellValue::from(self.id),
            "name" => CellValue::from(&self.name),
            "email" => CellValue::from(&self.email),
            "age" => CellValue::from(self.age),
            _ => CellValue::Empty,
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
        Column::new("age", "Age").sortable(),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User::new(1, "Bob", 30),
        User::new(2, "Alice", 25),
        User::new(3, "Alice", 40),
    ]
}

pub fn view(mode: SelectionMode) -> TableView<User> {
    TableView::new(columns(), mode).expect("valid columns")
}

pub fn ids(rows: &[&User]) -> Vec<u32> {
    rows.iter().map(|u| u.id).collect()
}
