//! Endpoint templates of the wall API. Placeholders use the `:name:` form.

pub const SAVE_FOLDER_POST: &str = "/api/Wall/postFolderPost";
pub const UPDATE_INACTIVE_POST: &str = "/api/Wall/putInactivePost/:idPost:/:tipoDestinatarios:";
pub const DELETE_FOLDER_POST: &str =
    "/api/Wall/deleteFolderPost/:postId:/:folderId:/:tipoDestinatarios:";
pub const GET_POSTS: &str = "/api/Wall/getPosts";
