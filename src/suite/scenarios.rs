//! The seven ordered scenario bodies
//!
//! Each scenario makes exactly one API call and checks status and message.
//! Scenarios 1-3 communicate through [`SuiteContext::current_revue_id`].

use super::SuiteContext;
use super::report::{ScenarioResult, expect_eq, expect_non_empty, expect_status, message};
use crate::client::{ResponseShape, RevueApi, RevueDraft};

pub const CREATED_MSG: &str = "Successfully created!";
pub const EDITED_MSG: &str = "Edited successfully";
pub const NOT_FOUND_MSG: &str = "There is no such revue!";

/// Identifier known not to exist on the service
pub const NON_EXISTING_ID: &str = "123";

/// Path segment the shared-state edit targets. It is the variable's name,
/// not its value, so the edit never reaches the created revue.
pub const SHARED_STATE_EDIT_SEGMENT: &str = "createdRevueId";

const OK: u16 = 200;
const BAD_REQUEST: u16 = 400;
const NOT_FOUND: u16 = 404;

/// POST a complete draft; remember the returned id
pub async fn create_with_required_fields<C: RevueApi + ?Sized>(
    client: &C,
    ctx: &mut SuiteContext,
) -> ScenarioResult {
    let draft = RevueDraft::new("New Revue", "Some Description", "");
    let raw = client.create_revue(&draft).await?;
    let envelope = raw.envelope()?;

    ctx.current_revue_id = envelope.revue_id.clone();

    expect_status(&raw, OK)?;
    expect_non_empty("revue id", envelope.revue_id.as_deref())?;
    expect_eq("message", CREATED_MSG, envelope.msg.as_deref())
}

/// GET every revue; remember the last one's id
pub async fn list_all<C: RevueApi + ?Sized>(client: &C, ctx: &mut SuiteContext) -> ScenarioResult {
    let raw = client.list_revues().await?;
    let records = raw.records()?;

    expect_status(&raw, OK)?;
    if let Some(last) = records.last() {
        ctx.current_revue_id = last.identifier().map(str::to_string);
        Ok(())
    } else {
        Err(super::ScenarioFailure::Assertion {
            what: "revue list",
            expected: "at least one revue".to_string(),
            actual: "an empty list".to_string(),
        })
    }
}

/// PUT an edit meant for the shared revue id
pub async fn edit_using_shared_state<C: RevueApi + ?Sized>(
    client: &C,
    ctx: &mut SuiteContext,
) -> ScenarioResult {
    log::warn!(
        "edit targets literal path segment '{}' instead of current revue id {:?}",
        SHARED_STATE_EDIT_SEGMENT,
        ctx.current_revue_id
    );

    let draft = RevueDraft::new("Edited Revue", "Updated description", "");
    let raw = client
        .edit_revue(SHARED_STATE_EDIT_SEGMENT, &draft)
        .await?;

    expect_status(&raw, NOT_FOUND)?;

    if !raw.is_blank() {
        let msg = message(&raw, ResponseShape::Envelope)?;
        expect_eq("message", EDITED_MSG, msg.as_deref())?;
    }
    Ok(())
}

/// POST a throwaway revue and check the raw `msg` property
pub async fn create_throwaway<C: RevueApi + ?Sized>(
    client: &C,
    _ctx: &mut SuiteContext,
) -> ScenarioResult {
    let draft = RevueDraft::new("Temp Revue", "Temp Desc", "");
    let raw = client.create_revue(&draft).await?;

    let msg = message(&raw, ResponseShape::Element)?;
    expect_eq("message", CREATED_MSG, msg.as_deref())
}

/// POST an empty draft; the service must reject it
pub async fn create_without_required_fields<C: RevueApi + ?Sized>(
    client: &C,
    _ctx: &mut SuiteContext,
) -> ScenarioResult {
    let draft = RevueDraft::default();
    let raw = client.create_revue(&draft).await?;

    expect_status(&raw, BAD_REQUEST)
}

/// PUT to an id that does not exist
pub async fn edit_non_existing<C: RevueApi + ?Sized>(
    client: &C,
    _ctx: &mut SuiteContext,
) -> ScenarioResult {
    let draft = RevueDraft::new(
        "Edited Non-Existing Revue",
        "This is an updated test revue description for a non-existing revue.",
        "",
    );
    let raw = client.edit_revue(NON_EXISTING_ID, &draft).await?;

    expect_status(&raw, NOT_FOUND)?;

    if !raw.is_blank() {
        let msg = message(&raw, ResponseShape::Envelope)?;
        expect_eq("message", NOT_FOUND_MSG, msg.as_deref())?;
    }
    Ok(())
}

/// DELETE an id that does not exist
pub async fn delete_non_existing<C: RevueApi + ?Sized>(
    client: &C,
    _ctx: &mut SuiteContext,
) -> ScenarioResult {
    let raw = client.delete_revue(NON_EXISTING_ID).await?;

    expect_status(&raw, NOT_FOUND)?;

    if !raw.is_blank() {
        let msg = message(&raw, ResponseShape::Envelope)?;
        expect_eq("message", NOT_FOUND_MSG, msg.as_deref())?;
    }
    Ok(())
}
