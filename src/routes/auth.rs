use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    AuthResponse, ErrorResponse, LoginRequest, OAuthRequest, PhoneStartRequest,
    PhoneStartResponse, PhoneVerifyRequest, RegisterRequest,
};
use crate::routes::search::AppState;
use crate::services::AuthError;

/// Configure auth-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login))
        .route("/auth/phone/start", web::post().to(phone_start))
        .route("/auth/phone/verify", web::post().to(phone_verify))
        .route("/auth/oauth", web::post().to(oauth));
}

/// A sign-in identifier of 8-15 digits (with optional `+`) is treated as a
/// phone number; anything else as an email address.
pub fn looks_like_phone(identifier: &str) -> bool {
    let len = identifier.chars().count();
    (8..=15).contains(&len) && identifier.chars().all(|c| c.is_ascii_digit() || c == '+')
}

/// Register with email and password
async fn register(state: web::Data<AppState>, req: web::Json<RegisterRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.auth.sign_up_email(&req.email, &req.password).await {
        Ok(session) => HttpResponse::Ok().json(AuthResponse { session }),
        Err(e) => auth_error_response(e),
    }
}

/// Sign in with an email or phone identifier.
///
/// Phone identifiers cannot be signed in with a password; the caller is
/// pointed at the two-step phone flow instead.
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if looks_like_phone(&req.identifier) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Phone sign-in requires a verification code".to_string(),
            message: "Start the phone flow at /auth/phone/start".to_string(),
            status_code: 400,
        });
    }

    match state.auth.sign_in_email(&req.identifier, &req.password).await {
        Ok(session) => HttpResponse::Ok().json(AuthResponse { session }),
        Err(e) => auth_error_response(e),
    }
}

/// Send a phone verification code
async fn phone_start(
    state: web::Data<AppState>,
    req: web::Json<PhoneStartRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .auth
        .send_phone_code(&req.phone_number, &req.recaptcha_token)
        .await
    {
        Ok(session_info) => HttpResponse::Ok().json(PhoneStartResponse { session_info }),
        Err(e) => auth_error_response(e),
    }
}

/// Verify a phone code and sign in
async fn phone_verify(
    state: web::Data<AppState>,
    req: web::Json<PhoneVerifyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.auth.sign_in_phone(&req.session_info, &req.code).await {
        Ok(session) => HttpResponse::Ok().json(AuthResponse { session }),
        Err(e) => auth_error_response(e),
    }
}

/// Sign in with a third-party OAuth provider token
async fn oauth(state: web::Data<AppState>, req: web::Json<OAuthRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .auth
        .sign_in_oauth(&req.provider_id, &req.id_token)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(AuthResponse { session }),
        Err(e) => auth_error_response(e),
    }
}

/// Backend auth errors carry a message shown verbatim; transport errors get a
/// generic body.
fn auth_error_response(error: AuthError) -> HttpResponse {
    match error {
        AuthError::Api(message) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Authentication failed".to_string(),
            message,
            status_code: 401,
        }),
        other => {
            tracing::error!("Auth backend error: {}", other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Authentication unavailable".to_string(),
                message: "Could not reach the authentication service. Please try again."
                    .to_string(),
                status_code: 500,
            })
        }
    }
}
