use super::endpoints::{DELETE_FOLDER_POST, GET_POSTS, SAVE_FOLDER_POST, UPDATE_INACTIVE_POST};
use super::wall_models::{DeleteFolderPost, PostsPage, PostsQuery, UpdateInactivePost};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_options::RequestOptions;
use crate::http_handler::http_response::response_common::NormalizedResponse;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub const POST_SAVED_KEY: &str = "alert.success.wall.post-saved";
pub const POST_DELETED_KEY: &str = "alert.success.wall.post-deleted";
pub const POST_REMOVED_KEY: &str = "alert.success.wall.post-removed";

/// Result handed back by the mutating calls when they fail.
fn empty_fallback() -> Value { Value::String(String::new()) }

/// Calls of the wall API. Every call is a single independent request.
#[derive(Clone)]
pub struct WallService {
    client: Arc<HTTPClient>,
}

impl WallService {
    pub fn new(client: Arc<HTTPClient>) -> Self { Self { client } }

    /// Saves a post into a folder; `params` is sent as the JSON body.
    pub async fn save_folder_post<S>(&self, params: &S) -> NormalizedResponse<Value>
    where S: Serialize + ?Sized {
        let options = RequestOptions::new()
            .data(params)
            .show_alert_if_error(true)
            .alert_msg_if_success(POST_SAVED_KEY)
            .default_value_error(empty_fallback());
        self.client.post(SAVE_FOLDER_POST, options).await
    }

    pub async fn update_inactive_post(&self, params: UpdateInactivePost) -> NormalizedResponse<Value> {
        let options = RequestOptions::new()
            .url_param("idPost", params.id_post)
            .url_param("tipoDestinatarios", params.tipo_destinatarios)
            .show_alert_if_error(true)
            .alert_msg_if_success(POST_DELETED_KEY)
            .default_value_error(empty_fallback());
        self.client.put(UPDATE_INACTIVE_POST, options).await
    }

    pub async fn delete_folder_post(&self, params: DeleteFolderPost) -> NormalizedResponse<Value> {
        let options = RequestOptions::new()
            .url_param("postId", params.post_id)
            .url_param("folderId", params.folder_id)
            .url_param("tipoDestinatarios", params.tipo_destinatarios)
            .show_alert_if_error(true)
            .alert_msg_if_success(POST_REMOVED_KEY)
            .default_value_error(empty_fallback());
        self.client.delete(DELETE_FOLDER_POST, options).await
    }

    /// Lists posts matching `query`. Failures yield an empty page without an alert.
    pub async fn get_posts(&self, query: &PostsQuery) -> NormalizedResponse<PostsPage> {
        let options = RequestOptions::new()
            .query_params(query)
            .default_value_error(PostsPage::default());
        self.client.get(GET_POSTS, options).await
    }
}
