//! 路由定义

use axum::{
    Router,
    extract::State,
    middleware,
    routing::{get, patch, post},
};
use dadamda_common::Slice;
use dadamda_errors::{ApiResponse, AppResult};
use uuid::Uuid;

use crate::application::{
    BoardContentsView, BoardView, BoardVisibility, CreateBoardCommand, CreatedBoard, FixedBoard,
    PageQuery, SearchBoardsQuery, UpdateBoardCommand, UpdateBoardContentsCommand,
};
use crate::domain::value_objects::BoardId;

use super::extract::{AppJson, AppPath, AppQuery};
use super::health::{health, ready};
use super::middleware::{AuthUser, auth_middleware};
use super::oauth2::oauth2_success;
use super::state::AppState;

/// 构建服务路由
///
/// `/v1/boards` 下的路由都需要 `X-AUTH-TOKEN`
pub fn router(state: AppState) -> Router {
    let boards = Router::new()
        .route("/v1/boards", post(create_board))
        .route("/v1/boards/list", get(get_board_list))
        .route("/v1/boards/search", get(search_boards))
        .route("/v1/boards/count", get(get_board_count))
        .route(
            "/v1/boards/{board}",
            get(get_board).patch(update_board).delete(delete_board),
        )
        .route("/v1/boards/fixed/{board}", patch(fix_board))
        .route(
            "/v1/boards/{board}/contents",
            get(get_board_contents).patch(update_board_contents),
        )
        .route("/v1/boards/{board}/visibility", get(get_board_visibility))
        .route_layer(middleware::from_fn_with_state(
            state.token_service.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/login/oauth2/success", get(oauth2_success))
        .merge(boards)
        .with_state(state)
}

// ========== 看板 ==========

async fn create_board(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(cmd): AppJson<CreateBoardCommand>,
) -> AppResult<ApiResponse<CreatedBoard>> {
    let board_id = state.board_service.create_board(&user.email, cmd).await?;
    Ok(ApiResponse::success(CreatedBoard {
        board_id: board_id.0,
    }))
}

async fn get_board_list(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<PageQuery>,
) -> AppResult<ApiResponse<Slice<BoardView>>> {
    let page = query.to_page_request()?;
    let slice = state.board_service.get_board_list(&user.email, page).await?;
    Ok(ApiResponse::success(slice))
}

async fn search_boards(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<SearchBoardsQuery>,
) -> AppResult<ApiResponse<Slice<BoardView>>> {
    let page = query.page_query().to_page_request()?;
    let slice = state
        .board_service
        .search_boards(&user.email, &query.keyword, page)
        .await?;
    Ok(ApiResponse::success(slice))
}

async fn get_board_count(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<ApiResponse<i64>> {
    let count = state.board_service.get_board_count(&user.email).await?;
    Ok(ApiResponse::success(count))
}

async fn get_board(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(board_id): AppPath<i64>,
) -> AppResult<ApiResponse<BoardView>> {
    let board = state
        .board_service
        .get_board(&user.email, BoardId(board_id))
        .await?;
    Ok(ApiResponse::success(board))
}

async fn update_board(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(board_id): AppPath<i64>,
    AppJson(cmd): AppJson<UpdateBoardCommand>,
) -> AppResult<ApiResponse<()>> {
    state
        .board_service
        .update_board(&user.email, BoardId(board_id), cmd)
        .await?;
    Ok(ApiResponse::ok())
}

async fn delete_board(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(board_id): AppPath<i64>,
) -> AppResult<ApiResponse<()>> {
    state
        .board_service
        .delete_board(&user.email, BoardId(board_id))
        .await?;
    Ok(ApiResponse::ok())
}

async fn fix_board(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(board_id): AppPath<i64>,
) -> AppResult<ApiResponse<FixedBoard>> {
    let is_fixed = state
        .board_service
        .fix_board(&user.email, BoardId(board_id))
        .await?;
    Ok(ApiResponse::success(FixedBoard { board_id, is_fixed }))
}

// ========== 内容与可见性 ==========

async fn get_board_contents(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(board_uuid): AppPath<Uuid>,
) -> AppResult<ApiResponse<BoardContentsView>> {
    let contents = state
        .board_service
        .get_board_contents(&user.email, board_uuid)
        .await?;
    Ok(ApiResponse::success(contents))
}

async fn update_board_contents(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(board_uuid): AppPath<Uuid>,
    AppJson(cmd): AppJson<UpdateBoardContentsCommand>,
) -> AppResult<ApiResponse<()>> {
    state
        .board_service
        .update_board_contents(&user.email, board_uuid, cmd)
        .await?;
    Ok(ApiResponse::ok())
}

async fn get_board_visibility(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(board_uuid): AppPath<Uuid>,
) -> AppResult<ApiResponse<BoardVisibility>> {
    let visibility = state
        .board_service
        .get_board_visibility(&user.email, board_uuid)
        .await?;
    Ok(ApiResponse::success(visibility))
}
