//! Given steps for board drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use eyre::{WrapErr, ensure};
use gropius::board::services::CreateItemRequest;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let snapshot = world
        .service
        .snapshot()
        .wrap_err("read board snapshot for scenario setup")?;
    ensure!(snapshot.is_empty(), "board is not empty at scenario start");
    Ok(())
}

#[given(r#"an item titled "{title}" described as "{description}" for {count:u32} people"#)]
fn item_on_the_board(
    world: &mut BoardWorld,
    title: String,
    description: String,
    count: u32,
) -> Result<(), eyre::Report> {
    let created = world
        .service
        .create_item(CreateItemRequest::new(title, description, count))
        .wrap_err("create item for scenario setup")?;
    world.last_created_item = Some(created);
    Ok(())
}
