use admin_shell::prelude::*;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("logger already installed: {err}");
    }
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    let config = ShellConfig::default();
    let title = config.title.clone();

    view! {
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Title text=title />

        <DashboardLayout config=config>
            <Overview />
        </DashboardLayout>
    }
}

/// Stand-in page content; the shell itself carries no data.
#[component]
fn Overview() -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2 xl:grid-cols-4">
            {["Monitored Entities", "Active Rules", "Open Alerts", "Model Confidence"]
                .into_iter()
                .map(|label| {
                    view! {
                        <div class="rounded-lg border border-border bg-card p-6">
                            <p class="text-sm text-muted-foreground">{label}</p>
                            <p class="text-2xl font-bold">"n/a"</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
