use shared_types::{
    unwrap_list_as, unwrap_object_as, AppError, CreatePolicyRequest, IssuePolicyRequest, Policy,
    PolicyDraft, PolicyStatus, UpdatePolicyStatusRequest,
};

use crate::http::query_pairs;
use crate::ApiClient;

const RESOURCE: &str = "policies";

/// List policies, optionally narrowed by status and owning farmer.
#[tracing::instrument(skip(client))]
pub async fn list_policies(
    client: &ApiClient,
    status: Option<PolicyStatus>,
    farmer_id: Option<&str>,
) -> Result<Vec<Policy>, AppError> {
    let query = query_pairs(&[
        ("status", status.map(|s| s.as_str())),
        ("farmerId", farmer_id),
    ]);
    let value = client.get_json("/policies", &query).await?;
    unwrap_list_as(&value, Some(RESOURCE))
}

/// Validate the draft locally, then create the policy.
pub async fn create_policy(client: &ApiClient, draft: PolicyDraft) -> Result<Policy, AppError> {
    let req = draft.into_request()?;
    post_policy(client, &req).await
}

#[tracing::instrument(skip(client, req), fields(farmer_id = %req.farmer_id))]
async fn post_policy(client: &ApiClient, req: &CreatePolicyRequest) -> Result<Policy, AppError> {
    let value = client.post_json("/policies", req).await?;
    unwrap_object_as(&value, Some("policy"))
}

#[tracing::instrument(skip(client))]
pub async fn update_policy_status(
    client: &ApiClient,
    id: &str,
    status: PolicyStatus,
) -> Result<(), AppError> {
    client
        .patch_json(&format!("/policies/{id}/status"), &UpdatePolicyStatusRequest { status })
        .await?;
    Ok(())
}

/// Issue a policy backed by a completed assessment.
#[tracing::instrument(skip(client, req))]
pub async fn issue_from_assessment(
    client: &ApiClient,
    assessment_id: &str,
    req: &IssuePolicyRequest,
) -> Result<Policy, AppError> {
    let value = client
        .post_json(&format!("/policies/from-assessment/{assessment_id}"), req)
        .await?;
    unwrap_object_as(&value, Some("policy"))
}
