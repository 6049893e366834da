use crate::domain::{AuthError, Credentials, FormFields, RegistrationInfo, UiEffect};
use crate::interface_adapters::protocol::{
    EndSessionResponse, ErrorResponse, FieldEditRequest, FormResponse, FormValues, LoginRequest,
    SessionResponse, SignupRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{FormSession, LoginUseCase, SessionUseCase, SignupUseCase};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Handler for a login form submission.
#[tracing::instrument(name = "login_submit", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<(StatusCode, Json<FormResponse>), HandlerError> {
    let credentials = Credentials {
        email: body.email,
        password: body.password,
    };
    let payload = state
        .login_form
        .lock()
        .await
        .begin_submit(credentials)
        .map_err(map_auth_error)?;
    let login_form = state.login_form.clone();

    // Run detached so a dropped connection cannot strand the form in Submitting.
    let task = tokio::spawn(async move {
        let use_case = LoginUseCase {
            api: state.auth.clone(),
            storage: state.storage.clone(),
        };
        let effect = use_case.execute(payload).await;

        let mut form = state.login_form.lock().await;
        form.finish(&effect);
        let values = login_values(form.fields());
        form_response(&*form, &effect, values, StatusCode::UNAUTHORIZED)
    });

    match task.await {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!(error = %err, "login task failed");
            login_form.lock().await.abort();
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

// Handler for a signup form submission.
#[tracing::instrument(name = "signup_submit", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<FormResponse>), HandlerError> {
    let info = RegistrationInfo {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        password: body.password,
    };
    let payload = state
        .signup_form
        .lock()
        .await
        .begin_submit(info)
        .map_err(map_auth_error)?;
    let signup_form = state.signup_form.clone();

    let task = tokio::spawn(async move {
        let use_case = SignupUseCase {
            api: state.auth.clone(),
        };
        let effect = use_case.execute(payload).await;

        let mut form = state.signup_form.lock().await;
        form.finish(&effect);
        let values = signup_values(form.fields());
        form_response(&*form, &effect, values, StatusCode::BAD_REQUEST)
    });

    match task.await {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!(error = %err, "signup task failed");
            signup_form.lock().await.abort();
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error"))
        }
    }
}

// Handler for a single-field edit on the login form.
pub async fn edit_login_field(
    State(state): State<AppState>,
    Json(body): Json<FieldEditRequest>,
) -> Result<Json<FormResponse>, HandlerError> {
    let mut form = state.login_form.lock().await;
    form.edit(body.field, body.value).map_err(map_auth_error)?;

    let values = login_values(form.fields());
    Ok(Json(form_body(&*form, values, None)))
}

// Handler for a single-field edit on the signup form.
pub async fn edit_signup_field(
    State(state): State<AppState>,
    Json(body): Json<FieldEditRequest>,
) -> Result<Json<FormResponse>, HandlerError> {
    let mut form = state.signup_form.lock().await;
    form.edit(body.field, body.value).map_err(map_auth_error)?;

    let values = signup_values(form.fields());
    Ok(Json(form_body(&*form, values, None)))
}

// Handler exposing the stored session token to authenticated-area collaborators.
pub async fn current_session(State(state): State<AppState>) -> Result<Response, HandlerError> {
    let use_case = SessionUseCase {
        storage: state.storage.clone(),
    };

    let token = use_case.current().await.map_err(map_auth_error)?;

    Ok(match token {
        Some(token) => Json(SessionResponse {
            token: token.into_inner(),
        })
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

// Handler for dropping the stored session token.
pub async fn end_session(
    State(state): State<AppState>,
) -> Result<Json<EndSessionResponse>, HandlerError> {
    let use_case = SessionUseCase {
        storage: state.storage.clone(),
    };

    let revoked = use_case.end().await.map_err(map_auth_error)?;
    tracing::info!(revoked, "session ended");

    Ok(Json(EndSessionResponse { revoked }))
}

fn form_response<F: FormFields>(
    form: &FormSession<F>,
    effect: &UiEffect,
    values: FormValues,
    rejected_status: StatusCode,
) -> (StatusCode, Json<FormResponse>) {
    let (status, redirect) = match effect {
        UiEffect::FieldErrors(_) => (StatusCode::UNPROCESSABLE_ENTITY, None),
        UiEffect::Navigate(route) => (StatusCode::OK, Some(route.path())),
        UiEffect::Rejected(_) => (rejected_status, None),
        UiEffect::ServiceError(_) => (StatusCode::BAD_GATEWAY, None),
    };

    (status, Json(form_body(form, values, redirect)))
}

fn form_body<F: FormFields>(
    form: &FormSession<F>,
    values: FormValues,
    redirect: Option<&'static str>,
) -> FormResponse {
    FormResponse {
        phase: form.phase(),
        errors: form.errors().clone(),
        message: form.notice().map(str::to_string),
        redirect,
        values,
    }
}

fn login_values(fields: &Credentials) -> FormValues {
    FormValues {
        first_name: None,
        last_name: None,
        email: fields.email.clone(),
    }
}

fn signup_values(fields: &RegistrationInfo) -> FormValues {
    FormValues {
        first_name: Some(fields.first_name.clone()),
        last_name: Some(fields.last_name.clone()),
        email: fields.email.clone(),
    }
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_auth_error(err: AuthError) -> HandlerError {
    match err {
        AuthError::SubmissionInFlight => {
            error_response(StatusCode::CONFLICT, "submission already in progress")
        }
        AuthError::FieldNotOnForm => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "field does not belong to this form",
        ),
        AuthError::StorageFailure => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}
