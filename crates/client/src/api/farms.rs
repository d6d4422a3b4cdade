use shared_types::{
    farms_for_farmer, unwrap_list_as, unwrap_object_as, AppError, Farm, FarmDraft,
};

use crate::ApiClient;

const RESOURCE: &str = "farms";

/// List farms. With `farmer_id` set, only that farmer's farms are kept;
/// the endpoint itself returns every farm.
#[tracing::instrument(skip(client))]
pub async fn list_farms(client: &ApiClient, farmer_id: Option<&str>) -> Result<Vec<Farm>, AppError> {
    let value = client.get_json("/farms", &[]).await?;
    let farms: Vec<Farm> = unwrap_list_as(&value, Some(RESOURCE))?;
    Ok(match farmer_id {
        Some(id) => farms_for_farmer(farms, id),
        None => farms,
    })
}

#[tracing::instrument(skip(client, draft))]
pub async fn create_farm(client: &ApiClient, farmer_id: &str, draft: FarmDraft) -> Result<Farm, AppError> {
    let req = draft.into_request(farmer_id)?;
    let value = client.post_json("/farms", &req).await?;
    unwrap_object_as(&value, Some("farm"))
}

#[tracing::instrument(skip(client))]
pub async fn delete_farm(client: &ApiClient, id: &str) -> Result<(), AppError> {
    client.delete(&format!("/farms/{id}")).await?;
    Ok(())
}
