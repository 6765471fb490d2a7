pub mod endpoints;
mod wall_models;
mod wall_service;

pub use wall_models::{DeleteFolderPost, PostsPage, PostsQuery, UpdateInactivePost};
pub use wall_service::{
    POST_DELETED_KEY, POST_REMOVED_KEY, POST_SAVED_KEY, WallService,
};
