//! When steps for board drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use gropius::board::domain::{
    AssigneeCount, ItemDescription, ItemRecord, ItemStatus, ItemTitle,
};
use gropius::board::services::CreateItemRequest;
use gropius::transfer::DragPayload;
use mockable::DefaultClock;
use rstest_bdd_macros::when;

fn lane_status(lane: &str) -> Result<ItemStatus, eyre::Report> {
    ItemStatus::try_from(lane).map_err(|err| eyre::eyre!("invalid lane in scenario: {err}"))
}

#[when(r#"a form titled "{title}" described as "{description}" for {count:u32} people is submitted"#)]
fn submit_form(world: &mut BoardWorld, title: String, description: String, count: u32) {
    let result = world
        .service
        .create_item(CreateItemRequest::new(title, description, count));
    if let Ok(ref created) = result {
        world.last_created_item = Some(created.clone());
    }
    world.last_create_result = Some(result);
}

#[when("a form with every field invalid is submitted")]
fn submit_fully_invalid_form(world: &mut BoardWorld) {
    let result = world
        .service
        .create_item(CreateItemRequest::new("", "", 0));
    world.last_create_result = Some(result);
}

#[when(r#"the item is dropped onto the "{lane}" lane"#)]
fn drop_item_onto_lane(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let item = world
        .last_created_item
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created item in scenario world"))?;
    let transfer = DragPayload::encode(item)
        .to_transfer_string()
        .wrap_err("encode transfer payload")?;

    let result = world.service.drop_on_lane(&transfer, lane_status(&lane)?);
    world.last_drop_result = Some(result);
    Ok(())
}

#[when(r#"the item is dropped with kind "{kind}" onto the "{lane}" lane"#)]
fn drop_item_with_kind(
    world: &mut BoardWorld,
    kind: String,
    lane: String,
) -> Result<(), eyre::Report> {
    let item = world
        .last_created_item
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created item in scenario world"))?;
    let transfer = DragPayload::with_kind(item, kind)
        .to_transfer_string()
        .wrap_err("encode transfer payload")?;

    let result = world.service.drop_on_lane(&transfer, lane_status(&lane)?);
    world.last_drop_result = Some(result);
    Ok(())
}

#[when(r#"an unknown item is dropped onto the "{lane}" lane"#)]
fn drop_unknown_item(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    // A record that exists as a value but was never added to the store.
    let stray = ItemRecord::new(
        ItemTitle::new("Stray").map_err(|err| eyre::eyre!("stray title: {err}"))?,
        ItemDescription::new("Never stored anywhere")
            .map_err(|err| eyre::eyre!("stray description: {err}"))?,
        AssigneeCount::new(1).map_err(|err| eyre::eyre!("stray assignee count: {err}"))?,
        &DefaultClock,
    );
    let transfer = DragPayload::encode(&stray)
        .to_transfer_string()
        .wrap_err("encode transfer payload")?;

    let result = world.service.drop_on_lane(&transfer, lane_status(&lane)?);
    world.last_drop_result = Some(result);
    Ok(())
}
