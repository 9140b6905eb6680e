use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use procurely_core::rbac::{filter_by_department, DirectoryUser};
use serde_json::{Map, Value};

use crate::world::AccessWorld;

/// Rows of a data table keyed by its header; empty cells are left out.
fn table_rows(step: &Step) -> Vec<Map<String, Value>> {
    let table = step.table.as_ref().expect("step needs a data table");
    let (header, rows) = table.rows.split_first().expect("table needs a header");

    rows.iter()
        .map(|row| {
            header
                .iter()
                .zip(row)
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(key, cell)| (key.clone(), Value::String(cell.clone())))
                .collect()
        })
        .collect()
}

#[given(expr = "the user directory:")]
fn given_directory(world: &mut AccessWorld, step: &Step) {
    let entries = table_rows(step)
        .into_iter()
        .filter_map(|row| DirectoryUser::from_json(&Value::Object(row)))
        .collect();
    world.directory = Some(entries);
}

#[given(expr = "the records:")]
fn given_records(world: &mut AccessWorld, step: &Step) {
    world.records = table_rows(step).into_iter().map(Value::Object).collect();
}

#[when(expr = "the records are filtered")]
fn when_filtered(world: &mut AccessWorld) {
    world.visible =
        filter_by_department(world.records.clone(), world.permissions(), world.directory.as_deref());
}

#[when(expr = "the records are filtered without a directory")]
fn when_filtered_without_directory(world: &mut AccessWorld) {
    world.visible =
        filter_by_department(world.records.clone(), world.permissions(), None::<&[DirectoryUser]>);
}

#[then(expr = "the visible records are {string}")]
fn then_visible(world: &mut AccessWorld, expected: String) {
    let expected: Vec<String> = if expected == "none" {
        vec![]
    } else {
        expected.split(',').map(|id| id.trim().to_string()).collect()
    };
    assert_eq!(world.visible_ids(), expected);
}

#[then(expr = "every record is visible in its original order")]
fn then_all_visible(world: &mut AccessWorld) {
    assert_eq!(world.visible, world.records);
}
