use axum::{Extension, Json, extract::State};

use crate::{
    app::state::AppState,
    auth::middleware::AuthUser,
    dto::auth::{
        ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
        MessageResponse, RegisterRequest, ResetPasswordRequest, UserResponse, VerifyEmailRequest,
    },
    error::AppError,
    usecases::auth::UserServices,
};

pub async fn register_handle(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = UserServices::register_user(
        &state.db,
        &state.jwt_config,
        state.email_service.as_ref(),
        req,
    )
    .await?;
    Ok(Json(response))
}

pub async fn login_handle(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = UserServices::login(&state.db, &state.jwt_config, req).await?;
    Ok(Json(response))
}

pub async fn verify_email_handle(
    State(state): State<AppState>,
    Json(req): Json<VerifyEmailRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    UserServices::verify_email_token(&state.db, &state.jwt_config, &req.token).await?;
    Ok(Json(MessageResponse {
        message: "Email verified".to_string(),
    }))
}

pub async fn request_verification_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<MessageResponse>, AppError> {
    UserServices::request_email_verification(
        &state.db,
        &state.jwt_config,
        state.email_service.as_ref(),
        auth_user.user_id,
    )
    .await?;
    Ok(Json(MessageResponse {
        message: "Verification email sent".to_string(),
    }))
}

// Always the same response so account existence is not revealed.
pub async fn forgot_password_handle(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    UserServices::forgot_password(&state.db, state.email_service.as_ref(), req).await?;
    Ok(Json(MessageResponse {
        message: "If an account exists for that email, a reset link has been sent".to_string(),
    }))
}

pub async fn reset_password_handle(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    UserServices::reset_password(&state.db, req).await?;
    Ok(Json(MessageResponse {
        message: "Your password has been reset".to_string(),
    }))
}

pub async fn get_me_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserServices::get_user_by_id(&state.db, auth_user.user_id).await?;
    Ok(Json(user))
}

pub async fn change_password_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    UserServices::change_password(&state.db, auth_user.user_id, req).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn delete_account_handle(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<axum::http::StatusCode, AppError> {
    UserServices::delete_account(&state.db, auth_user.user_id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
