use anyhow::{bail, Result};
use procurely_core::rbac::{
    role_definition, role_definitions, CatalogPermissionChecker, PermissionChecker, RoleDefinition,
};

fn render(def: &RoleDefinition) -> String {
    format!(
        "{:<16} {:<14} {}\n{:<16} tags: {}",
        def.key,
        def.name,
        def.description,
        "",
        def.permissions.join(", ")
    )
}

/// List the whole role catalog.
pub fn list(json: bool) -> Result<String> {
    if json {
        let defs: Vec<_> = role_definitions().collect();
        return Ok(serde_json::to_string_pretty(&defs)?);
    }

    Ok(role_definitions().map(render).collect::<Vec<_>>().join("\n"))
}

/// Show one role, optionally checking a permission tag.
pub fn show(key: &str, tag: Option<&str>, json: bool) -> Result<String> {
    let Some(def) = role_definition(key) else {
        bail!("unknown role: \"{}\"", key);
    };

    if let Some(tag) = tag {
        let granted = CatalogPermissionChecker.has_permission(key, tag);
        return Ok(if json {
            serde_json::json!({ "role": key, "tag": tag, "granted": granted }).to_string()
        } else {
            format!("{} {} {}", key, if granted { "has" } else { "lacks" }, tag)
        });
    }

    if json {
        return Ok(serde_json::to_string_pretty(def)?);
    }
    Ok(render(def))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_contains_every_role() {
        let out = list(false).unwrap();
        for key in ["end_user", "manager", "director", "procurement_sme", "finance", "legal", "admin"] {
            assert!(out.contains(key), "{key}");
        }
    }

    #[test]
    fn list_json_is_an_array() {
        let value: serde_json::Value = serde_json::from_str(&list(true).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(7));
        assert_eq!(value[6]["permissions"], serde_json::json!(["*"]));
    }

    #[test]
    fn show_unknown_role_fails() {
        assert!(show("cfo", None, false).is_err());
        assert!(show("cfo", Some("manage_users"), false).is_err());
        assert!(show("legal", None, false).unwrap().contains("Legal"));
    }

    #[test]
    fn show_checks_tags() {
        assert_eq!(show("director", Some("approve_high_value"), false).unwrap(), "director has approve_high_value");
        assert_eq!(show("manager", Some("approve_high_value"), false).unwrap(), "manager lacks approve_high_value");

        let value: serde_json::Value =
            serde_json::from_str(&show("admin", Some("manage_system"), true).unwrap()).unwrap();
        assert_eq!(value["granted"], serde_json::json!(true));
    }
}
