use crate::app::App;
use crate::db::submissions;
use crate::domain::contact::{share_link, ContactLinks};
use crate::domain::{featured_businesses, filter_businesses, sort_by_district_category};
use crate::domain::{FilterQuery, ResultsView, ViewMode};
use crate::errors::ServerError;
use crate::forms::{self, ContactForm};
use crate::i18n::{Lang, LANG_COOKIE};
use crate::requests::{
    client_ip, cookie, header, is_htmx, local_path, path_segment, query_params, read_fields,
};
use crate::responses::{css_response, html_response, json_response, redirect, ResultResp};
use crate::templates::pages::{self, DirectoryVm, ProfileVm};
use crate::templates::{notification, Notice, NoticeKind, PageCtx};
use astra::Request;
use serde_json::{json, Value};
use std::sync::Arc;

const APP_CSS: &str = include_str!("../static/app.css");
const LANG_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => directory(&req, app, false),
        ("GET", "/results") => directory(&req, app, true),
        ("GET", "/lang") => set_lang(&req),
        ("GET", "/register") => redirect(&app.config.ui.registration_form_url, None),
        ("GET", "/static/app.css") => css_response(APP_CSS),
        ("POST", "/reload") => {
            let _ = app.directory.spawn_reload(Arc::clone(&app.source));
            redirect("/", None)
        }
        ("POST", "/api/contact") => contact(&mut req, app),
        ("POST", "/api/newsletter") => newsletter(&mut req, app),
        ("GET", p) if p.starts_with("/business/") => {
            let id = path_segment(&p["/business/".len()..]).ok_or(ServerError::NotFound)?;
            profile(&req, app, &id)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn lang_of(req: &Request, app: &App) -> Lang {
    cookie(req, LANG_COOKIE)
        .and_then(|v| Lang::from_key(&v))
        .unwrap_or(app.config.ui.default_lang)
}

fn here(req: &Request) -> String {
    match req.uri().query() {
        Some(q) => format!("{}?{q}", req.uri().path()),
        None => req.uri().path().to_string(),
    }
}

fn directory(req: &Request, app: &App, partial: bool) -> ResultResp {
    let lang = lang_of(req, app);
    let params = query_params(req);
    let query = FilterQuery::from_params(&params);

    let current = app.directory.current();
    let dataset = current.dataset.as_ref();

    let mut subset = filter_businesses(dataset.businesses(), &query);
    if app.config.ui.sort_by_district_category {
        sort_by_district_category(&mut subset);
    }
    let mut results = ResultsView::new(subset, ViewMode::default());
    if let Some(view) = params.get("view") {
        results = results.with_mode(ViewMode::from_param(Some(view)));
    }

    let notice = current.status.is_failed().then(|| Notice::load_failed(lang));

    if partial {
        let ctx = PageCtx::new(lang, &app.config.ui, "/");
        return html_response(pages::results_partial(&ctx, &query, &results));
    }

    let ctx = PageCtx::new(lang, &app.config.ui, here(req)).with_notice(notice);
    let vm = DirectoryVm {
        query: &query,
        facets: dataset.facets(),
        results,
        featured: featured_businesses(dataset.businesses(), app.config.ui.featured_limit),
    };
    html_response(pages::directory_page(&ctx, &vm))
}

fn profile(req: &Request, app: &App, id: &str) -> ResultResp {
    let lang = lang_of(req, app);
    let current = app.directory.current();
    let business = current.dataset.get(id).ok_or(ServerError::NotFound)?;

    let scheme = header(req, "x-forwarded-proto").unwrap_or("http");
    let host = header(req, "host").unwrap_or(app.config.bind_addr.as_str());
    let profile_url = format!("{scheme}://{host}{}", business.profile_path());
    let share_href = share_link(&format!(
        "{} - {}, {}\n{profile_url}",
        business.business_name, business.category, business.district
    ));

    let vm = ProfileVm {
        business,
        links: ContactLinks::for_business(business, &app.config.ui.country_code),
        share_href,
    };
    let ctx = PageCtx::new(lang, &app.config.ui, here(req));
    html_response(pages::profile_page(&ctx, &vm))
}

fn set_lang(req: &Request) -> ResultResp {
    let params = query_params(req);
    let lang = params
        .get("value")
        .and_then(|v| Lang::from_key(v))
        .ok_or_else(|| ServerError::BadRequest("unknown language".into()))?;
    let next = local_path(params.get("next"));

    let cookie = format!(
        "{LANG_COOKIE}={}; Path=/; Max-Age={LANG_COOKIE_MAX_AGE}; SameSite=Lax",
        lang.key()
    );
    redirect(&next, Some(cookie))
}

/// JSON for API clients; a banner fragment for htmx forms, which only swap 2xx bodies.
fn form_reply(req: &Request, app: &App, status: u16, kind: NoticeKind, body: Value) -> ResultResp {
    if !is_htmx(req) {
        return json_response(status, &body);
    }

    let message = body["message"].as_str().unwrap_or_default();
    let notice = Notice::new(kind, message);
    html_response(notification(&notice, lang_of(req, app), app.config.ui.notification_ttl_ms))
}

fn failure(message: impl Into<String>) -> Value {
    json!({ "success": false, "message": message.into() })
}

fn contact(req: &mut Request, app: &App) -> ResultResp {
    let fields = match read_fields(req) {
        Ok(f) => f,
        Err(ServerError::BadRequest(msg)) => return form_reply(req, app, 400, NoticeKind::Error, failure(msg)),
        Err(e) => return Err(e),
    };

    let form = match ContactForm::from_fields(&fields) {
        Ok(form) => form,
        Err(missing) => {
            log::info!("contact form rejected, missing {missing:?}");
            let body = json!({
                "success": false,
                "message": forms::missing_fields_message(&missing),
                "missing_fields": missing,
            });
            return form_reply(req, app, 400, NoticeKind::Error, body);
        }
    };

    let ip = client_ip(req);
    let now = chrono::Utc::now().timestamp();
    let stored = app
        .db
        .with_conn(|conn| submissions::insert_contact(conn, &form, ip.as_deref(), now));

    match stored {
        Ok(row) => {
            log::info!("contact submission #{row} from {}", form.email);
            let body = json!({
                "success": true,
                "message": forms::MSG_CONTACT_OK,
                "submission_id": format!("CONTACT_{now}"),
            });
            form_reply(req, app, 200, NoticeKind::Success, body)
        }
        Err(e) => {
            log::error!("storing contact submission failed: {e}");
            form_reply(req, app, 500, NoticeKind::Error, failure(forms::MSG_SERVER_ERROR))
        }
    }
}

fn newsletter(req: &mut Request, app: &App) -> ResultResp {
    let fields = match read_fields(req) {
        Ok(f) => f,
        Err(ServerError::BadRequest(msg)) => return form_reply(req, app, 400, NoticeKind::Error, failure(msg)),
        Err(e) => return Err(e),
    };

    let email = match forms::newsletter_email(&fields) {
        Ok(email) => email,
        Err(msg) => return form_reply(req, app, 400, NoticeKind::Error, failure(msg)),
    };

    let ip = client_ip(req);
    let now = chrono::Utc::now().timestamp();
    let stored = app
        .db
        .with_conn(|conn| submissions::subscribe_newsletter(conn, &email, ip.as_deref(), now));

    match stored {
        Ok(is_new) => {
            log::info!("newsletter subscription for {email} (new: {is_new})");
            let body = json!({ "success": true, "message": forms::MSG_NEWSLETTER_OK });
            let kind = if is_new { NoticeKind::Success } else { NoticeKind::Info };
            form_reply(req, app, 200, kind, body)
        }
        Err(e) => {
            log::error!("storing newsletter subscription failed: {e}");
            form_reply(req, app, 500, NoticeKind::Error, failure(forms::MSG_SERVER_ERROR))
        }
    }
}
