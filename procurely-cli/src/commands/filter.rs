use anyhow::Result;
use procurely_core::rbac::{AccessResolver, Collection, DirectoryUser};
use std::path::Path;

use super::permissions::{load_user, UserSource};
use super::read_json_array;

/// Inputs of the `filter` command.
pub struct FilterArgs<'a> {
    pub user: &'a Path,
    pub records: &'a Path,
    pub directory: Option<&'a Path>,
    pub collection: Option<Collection>,
}

/// Read the requestor directory; rows that cannot resolve anyone are skipped.
fn load_directory(path: &Path) -> Result<Vec<DirectoryUser>> {
    let rows = read_json_array(path)?;
    let total = rows.len();
    let entries: Vec<_> = rows.iter().filter_map(DirectoryUser::from_json).collect();

    if entries.len() < total {
        log::debug!(
            "Skipped {} directory rows without string id and department in {}",
            total - entries.len(),
            path.display()
        );
    }
    Ok(entries)
}

/// Print the records the user may see.
pub fn run(args: FilterArgs<'_>, resolver: &AccessResolver) -> Result<String> {
    let user = load_user(UserSource::File(args.user))?;
    let records = read_json_array(args.records)?;
    let directory = match args.directory {
        Some(path) => Some(load_directory(path)?),
        None => None,
    };

    let permissions = resolver.permissions_for(&user);
    let total = records.len();
    let visible = match args.collection {
        Some(collection) => {
            resolver.scope(collection, records, &permissions, directory.as_deref())
        }
        None => resolver.filter(records, &permissions, directory.as_deref()),
    };

    log::info!("{} of {} records visible to {} ({})", visible.len(), total, user.id, user.role);
    Ok(serde_json::to_string_pretty(&visible)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: serde_json::Value) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content.to_string()).unwrap();
        path
    }

    #[test]
    fn filters_records_with_directory() {
        let dir = tempfile::tempdir().unwrap();
        let user = write(dir.path(), "user.json", serde_json::json!({ "id": "me", "role": "end_user", "department": "IT" }));
        let records = write(
            dir.path(),
            "records.json",
            serde_json::json!([
                { "id": "a", "department": "IT" },
                { "id": "b", "department": "Legal" },
                { "id": "c", "requestorId": "u1" },
                { "id": "d", "requestorId": "u2" }
            ]),
        );
        let directory = write(
            dir.path(),
            "users.json",
            serde_json::json!([
                { "id": "u1", "role": "end_user", "department": "IT" },
                { "id": "u2", "role": "end_user", "department": "Legal" }
            ]),
        );

        let out = run(
            FilterArgs { user: &user, records: &records, directory: Some(directory.as_path()), collection: None },
            &AccessResolver::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let ids: Vec<_> = value.as_array().unwrap().iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![serde_json::json!("a"), serde_json::json!("c")]);
    }

    #[test]
    fn directory_rows_need_no_role() {
        let dir = tempfile::tempdir().unwrap();
        let user = write(dir.path(), "user.json", serde_json::json!({ "role": "end_user", "department": "IT" }));
        let records = write(
            dir.path(),
            "records.json",
            serde_json::json!([
                { "department": "IT" },
                { "department": "Legal" },
                { "requestorId": "u1" },
                { "requestorId": "u2" },
                { "requestorId": "u3" }
            ]),
        );
        let directory = write(
            dir.path(),
            "users.json",
            serde_json::json!([
                { "id": "u1", "department": "IT" },
                { "id": "u2", "department": "Legal" },
                { "id": "u3" },
                "not a row"
            ]),
        );

        let out = run(
            FilterArgs { user: &user, records: &records, directory: Some(directory.as_path()), collection: None },
            &AccessResolver::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "department": "IT" }, { "requestorId": "u1" }, { "requestorId": "u3" }])
        );
    }

    #[test]
    fn collection_capability_applies() {
        let dir = tempfile::tempdir().unwrap();
        let user = write(dir.path(), "user.json", serde_json::json!({ "role": "manager", "department": "IT" }));
        let records = write(
            dir.path(),
            "records.json",
            serde_json::json!([{ "department": "IT" }, { "department": "Legal" }]),
        );

        let resolver = AccessResolver::audited();
        let args = |collection| FilterArgs { user: &user, records: &records, directory: None, collection };

        let contracts: Vec<serde_json::Value> =
            serde_json::from_str(&run(args(Some(Collection::Contracts)), &resolver).unwrap()).unwrap();
        let invoices: Vec<serde_json::Value> =
            serde_json::from_str(&run(args(Some(Collection::Invoices)), &resolver).unwrap()).unwrap();

        assert_eq!(contracts.len(), 2);
        assert_eq!(invoices.len(), 1);
    }

    #[test]
    fn records_must_be_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let user = write(dir.path(), "user.json", serde_json::json!({ "role": "admin", "department": "IT" }));
        let records = write(dir.path(), "records.json", serde_json::json!({ "department": "IT" }));

        let err = run(
            FilterArgs { user: &user, records: &records, directory: None, collection: None },
            &AccessResolver::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("must contain a JSON array"));
    }
}
