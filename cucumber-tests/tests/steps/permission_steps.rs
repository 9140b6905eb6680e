use cucumber::{given, then, when};
use procurely_core::rbac::{derive_permissions, Capability, User};

use crate::world::AccessWorld;

fn capability(key: &str) -> Capability {
    Capability::ALL
        .into_iter()
        .find(|c| c.key() == key)
        .unwrap_or_else(|| panic!("unknown capability {key}"))
}

#[given(expr = "a(n) {word} user in the {string} department")]
fn given_user(world: &mut AccessWorld, role: String, department: String) {
    world.user = Some(User::new("caller", "Caller", role, department));
}

#[given(expr = "the user has the cross-department override")]
fn given_override(world: &mut AccessWorld) {
    let user = world.user.take().expect("no user in scenario");
    world.user = Some(user.with_view_all_departments(true));
}

#[when(expr = "permissions are derived")]
fn when_derived(world: &mut AccessWorld) {
    world.permissions = Some(derive_permissions(world.user()));
}

#[then(expr = "capability {word} is granted")]
fn then_granted(world: &mut AccessWorld, key: String) {
    assert!(world.permissions().has(capability(&key)), "{key} should be granted");
}

#[then(expr = "capability {word} is not granted")]
fn then_not_granted(world: &mut AccessWorld, key: String) {
    assert!(!world.permissions().has(capability(&key)), "{key} should not be granted");
}

#[then(expr = "deriving again yields the same permissions")]
fn then_deterministic(world: &mut AccessWorld) {
    assert_eq!(&derive_permissions(world.user()), world.permissions());
}

#[then(expr = "the permissions echo role {word} and department {string}")]
fn then_echo(world: &mut AccessWorld, role: String, department: String) {
    assert_eq!(world.permissions().role, role);
    assert_eq!(world.permissions().department, department);
}
