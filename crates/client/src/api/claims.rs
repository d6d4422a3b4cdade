use shared_types::{
    unwrap_list_as, unwrap_object_as, AppError, Claim, ClaimDraft, ClaimStatus,
    CreateClaimRequest, UpdateClaimStatusRequest,
};

use crate::http::query_pairs;
use crate::ApiClient;

const RESOURCE: &str = "claims";

#[tracing::instrument(skip(client))]
pub async fn list_claims(
    client: &ApiClient,
    status: Option<ClaimStatus>,
    farmer_id: Option<&str>,
) -> Result<Vec<Claim>, AppError> {
    let query = query_pairs(&[
        ("status", status.map(|s| s.as_str())),
        ("farmerId", farmer_id),
    ]);
    let value = client.get_json("/claims", &query).await?;
    unwrap_list_as(&value, Some(RESOURCE))
}

/// File a claim. A draft with no policy selected (or any other blank
/// required field) fails here without contacting the API.
pub async fn create_claim(client: &ApiClient, draft: ClaimDraft) -> Result<Claim, AppError> {
    let req = draft.into_request()?;
    post_claim(client, &req).await
}

#[tracing::instrument(skip(client, req), fields(policy_id = %req.policy_id))]
async fn post_claim(client: &ApiClient, req: &CreateClaimRequest) -> Result<Claim, AppError> {
    let value = client.post_json("/claims", req).await?;
    unwrap_object_as(&value, Some("claim"))
}

#[tracing::instrument(skip(client))]
pub async fn update_claim_status(
    client: &ApiClient,
    id: &str,
    status: ClaimStatus,
    note: Option<String>,
) -> Result<(), AppError> {
    client
        .patch_json(
            &format!("/claims/{id}/status"),
            &UpdateClaimStatusRequest { status, note },
        )
        .await?;
    Ok(())
}
