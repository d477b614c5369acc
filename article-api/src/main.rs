mod routes;

use article_app::{AppContext, Config};
use article_ui::App;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = match get_configuration(Some("Cargo.toml")) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Failed to load Leptos config: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match Config::from_env().map_err(|e| e.to_string()).and_then(|config| {
        AppContext::new(config).map_err(|e| e.to_string())
    }) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .merge(routes::api_router(app_context.clone()))
        .layer(CompressionLayer::new());

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "Webhook configured: {}",
        app_context.config.webhook_configured()
    );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

const CSS: &str = r#"
:root {
    --base: #eef2ff;
    --surface: #ffffff;
    --overlay: #d1d5db;
    --muted: #6b7280;
    --text: #1f2937;
    --accent: #4f46e5;
    --accent-dark: #4338ca;
    --success-bg: #f0fdf4;
    --success-border: #86efac;
    --success-text: #166534;
    --error-bg: #fef2f2;
    --error-border: #fca5a5;
    --error-text: #991b1b;
    --info-bg: #eff6ff;
    --info-border: #bfdbfe;
    --info-text: #1e40af;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: linear-gradient(135deg, #faf5ff, var(--base));
    color: var(--text);
    min-height: 100vh;
}
.processor { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 1rem; }
.processor__card { background: var(--surface); border-radius: 16px; box-shadow: 0 25px 50px -12px rgba(0,0,0,.25); padding: 2rem; max-width: 32rem; width: 100%; }
.processor__header { text-align: center; margin-bottom: 2rem; }
.processor__logo { font-size: 3.75rem; margin-bottom: 1rem; }
.processor__title { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.processor__subtitle { color: var(--muted); }
.processor__footer { margin-top: 1.5rem; text-align: center; font-size: 0.75rem; color: var(--muted); }
.article-form { display: flex; flex-direction: column; gap: 1.5rem; }
.article-form__label { display: flex; align-items: center; font-size: 0.875rem; font-weight: 600; margin-bottom: 0.5rem; }
.article-form__icon { font-size: 1.5rem; margin-right: 0.5rem; }
.article-form__input { width: 100%; padding: 0.75rem 1rem; border: 2px solid var(--overlay); border-radius: 8px; font-size: 1rem; outline: none; }
.article-form__input:focus { border-color: var(--accent); }
.article-form__input:disabled { background: #f3f4f6; }
.article-form__hint { font-size: 0.75rem; color: var(--muted); margin-top: 0.25rem; }
.article-form__button {
    width: 100%; padding: 1rem; border: none; border-radius: 8px; cursor: pointer;
    background: linear-gradient(90deg, var(--accent), #9333ea); color: #fff; font-size: 1.125rem; font-weight: 700;
}
.article-form__button:hover { background: linear-gradient(90deg, var(--accent-dark), #7e22ce); }
.article-form__button:disabled { background: #9ca3af; cursor: not-allowed; }
.loading { display: inline-flex; align-items: center; justify-content: center; gap: 0.75rem; }
.loading__spinner { animation: spin 1s linear infinite; }
.loading__track { opacity: 0.25; }
.loading__arc { opacity: 0.75; }
@keyframes spin { to { transform: rotate(360deg); } }
.result { margin-top: 1.5rem; padding: 1rem; border-radius: 8px; border: 2px solid; }
.result--success { background: var(--success-bg); border-color: var(--success-border); color: var(--success-text); }
.result--error { background: var(--error-bg); border-color: var(--error-border); color: var(--error-text); }
.result__message { font-weight: 500; }
.result__session { font-size: 0.75rem; margin-top: 0.5rem; opacity: 0.75; }
.next-steps { margin-top: 1.5rem; padding: 1rem; background: var(--info-bg); border: 2px solid var(--info-border); border-radius: 8px; }
.next-steps__title { font-weight: 600; color: var(--info-text); margin-bottom: 0.5rem; }
.next-steps__list { font-size: 0.875rem; color: var(--info-text); list-style: decimal inside; }
"#;

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"AI Article Processor"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🤖</text></svg>"/>
                <style>{CSS}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
