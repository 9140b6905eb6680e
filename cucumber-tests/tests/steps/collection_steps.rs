use cucumber::{given, when};
use procurely_core::rbac::{scope_collection, Collection};

use crate::world::AccessWorld;

#[given(expr = "the {word} collection")]
fn given_collection(world: &mut AccessWorld, name: String) {
    let collection: Collection = name.parse().unwrap_or_else(|e| panic!("{e}"));
    world.collection = Some(collection);
}

#[when(expr = "the collection is scoped")]
fn when_scoped(world: &mut AccessWorld) {
    let collection = world.collection.expect("no collection in scenario");
    world.visible = scope_collection(
        collection,
        world.records.clone(),
        world.permissions(),
        world.directory.as_deref(),
    );
}
