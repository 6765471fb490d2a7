use chrono::{DateTime, Utc};
use serde_json::Value;

/// Route parameters for deactivating a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateInactivePost {
    pub id_post: u64,
    /// Recipient-type code the post was published to.
    pub tipo_destinatarios: u32,
}

/// Route parameters for removing a post from a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteFolderPost {
    pub post_id: u64,
    pub folder_id: u64,
    pub tipo_destinatarios: u32,
}

/// Filter of the post listing. Unset fields are left out of the query string.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostsQuery {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub sender: Option<String>,
    pub show_unread: Option<bool>,
    pub feed_selected: Option<String>,
    pub folder_id: Option<u64>,
    pub search_text: Option<String>,
    pub num_posts_loaded: Option<u32>,
}

/// One page of wall posts. The default value is what callers get when the listing fails.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    #[serde(default)]
    nr_posts_nao_lidos: Option<u32>,
    #[serde(default)]
    nr_total_rascunhos: Option<u32>,
    #[serde(default)]
    lst_posts: Vec<Value>,
}

impl PostsPage {
    /// Number of unread posts, if the server reported it.
    pub fn unread_count(&self) -> Option<u32> { self.nr_posts_nao_lidos }
    /// Number of drafts, if the server reported it.
    pub fn draft_count(&self) -> Option<u32> { self.nr_total_rascunhos }
    pub fn posts(&self) -> &[Value] { &self.lst_posts }
}
