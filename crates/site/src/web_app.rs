use clinic_ui::{design_token_stylesheet, Theme, ThemeProvider};
use clinic_ui_showcase::ShowcasePage;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const THEME_KEY: &str = "clinicui.theme.v1";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn restore_theme() -> Option<Theme> {
    let storage = local_storage()?;
    let raw = storage.get_item(THEME_KEY).ok().flatten()?;
    match Theme::from_tokens(&raw) {
        Ok(theme) => Some(theme),
        Err(err) => {
            logging::warn!("stored theme ignored: {err}");
            None
        }
    }
}

fn persist_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(THEME_KEY, &theme.tokens()).is_err() {
        logging::warn!("theme persist failed");
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let initial_theme = restore_theme().unwrap_or_default();

    view! {
        <Title text="Clinic UI" />
        <Meta name="description" content="Component gallery for the clinical design system." />
        <Style>{design_token_stylesheet()}</Style>

        <ThemeProvider initial=initial_theme on_change=Callback::new(persist_theme)>
            <Router>
                <main class="site-root min-h-screen">
                    <Routes>
                        <Route path="" view=ShowcasePage />
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}
