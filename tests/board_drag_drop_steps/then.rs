//! Then steps for board drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use gropius::board::domain::ItemStatus;
use gropius::board::ports::BoardStoreError;
use gropius::board::services::BoardServiceError;
use gropius::transfer::TransferError;
use rstest_bdd_macros::then;

#[then("the board record count is {count:usize}")]
fn board_record_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let snapshot = world
        .service
        .snapshot()
        .wrap_err("read board snapshot for assertion")?;
    if snapshot.len() != count {
        return Err(eyre::eyre!(
            "expected {count} records, found {}",
            snapshot.len()
        ));
    }
    Ok(())
}

#[then(r#"the latest item is on the "{lane}" lane"#)]
fn latest_item_is_on_lane(world: &BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let expected = ItemStatus::try_from(lane.as_str())
        .map_err(|err| eyre::eyre!("invalid expected lane in scenario: {err}"))?;
    let item = world
        .last_created_item
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created item"))?;

    let snapshot = world
        .service
        .snapshot()
        .wrap_err("read board snapshot for assertion")?;
    let record = snapshot
        .iter()
        .find(|record| record.id() == item.id())
        .ok_or_else(|| eyre::eyre!("created item is missing from the board"))?;

    if record.status() != expected {
        return Err(eyre::eyre!(
            "expected lane {}, found {}",
            expected.as_str(),
            record.status().as_str()
        ));
    }
    Ok(())
}

#[then("the submission is rejected")]
fn submission_is_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;

    if !matches!(result, Err(BoardServiceError::ValidationFailed)) {
        return Err(eyre::eyre!("expected ValidationFailed, got {result:?}"));
    }
    Ok(())
}

#[then("the drop is rejected as uninterpretable")]
fn drop_is_rejected_as_uninterpretable(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_drop_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop result"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Transfer(TransferError::KindMismatch { .. }))
    ) {
        return Err(eyre::eyre!("expected KindMismatch, got {result:?}"));
    }
    Ok(())
}

#[then("the drop reports a missing record")]
fn drop_reports_missing_record(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_drop_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop result"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Store(BoardStoreError::RecordNotFound(_)))
    ) {
        return Err(eyre::eyre!("expected RecordNotFound, got {result:?}"));
    }
    Ok(())
}
