use gloo::events::EventListener;
use leptos::*;
use strum::IntoEnumIterator;

use crate::application::{Action, DataMode};
use crate::domain::chart::{ChartType, palette_color};
use crate::domain::market_data::Period;
use crate::domain::settings::Settings;
use crate::presentation::shell::{CHART_ELEMENT_ID, Shell};

/// 🦀 Root component: owns the shell and starts it once mounted
#[component]
pub fn App() -> impl IntoView {
    let shell = Shell::new();
    provide_context(shell.clone());

    let starter = shell.clone();
    // The chart element only exists once the view is mounted
    request_animation_frame(move || starter.start());

    let resizer = shell.clone();
    EventListener::new(&window(), "resize", move |_| resizer.resize_chart()).forget();

    let state = shell.state();

    view! {
        <style>
            {r#"
            .symbol-chart-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }
            .panel {
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 16px 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
                margin-bottom: 16px;
            }
            .header { display: flex; justify-content: space-between; align-items: center; }
            .status-ok { color: #72c685; }
            .status-bad { color: #ee6666; }
            .search-box { position: relative; }
            .search-box input { width: 100%; padding: 8px 12px; border-radius: 8px; border: none; }
            .suggestions {
                position: absolute; left: 0; right: 0; list-style: none; margin: 4px 0; padding: 0;
                background: #2c3e50; border-radius: 8px; z-index: 10;
            }
            .suggestion { padding: 6px 12px; cursor: pointer; display: flex; gap: 10px; }
            .suggestion:hover { background: #4a5d73; }
            .market { color: #9fb3c8; font-size: 12px; }
            .chip, .chip-add {
                display: inline-flex; gap: 6px; align-items: center; margin: 4px; padding: 4px 10px;
                border-radius: 12px; border: none; background: #4a5d73; color: white;
            }
            .chip-add { cursor: pointer; background: rgba(255, 255, 255, 0.15); }
            .controls { display: flex; gap: 12px; align-items: center; flex-wrap: wrap; }
            .btn { background: #4a5d73; color: white; border: none; padding: 6px 14px; border-radius: 6px; cursor: pointer; }
            .btn:disabled { opacity: 0.5; cursor: wait; }
            .chart { width: 100%; height: 480px; }
            .mode-badge { font-size: 12px; padding: 2px 8px; border-radius: 8px; background: #fac858; color: #1e3c72; }
            .legend { display: flex; gap: 16px; flex-wrap: wrap; margin-top: 8px; font-size: 13px; }
            .swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 4px; }
            .modal-backdrop {
                position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6);
                display: flex; align-items: center; justify-content: center; z-index: 20;
            }
            .modal { background: #2c3e50; padding: 20px; border-radius: 12px; min-width: 320px; }
            .modal label { display: block; margin: 10px 0; }
            .toasts { position: fixed; right: 20px; bottom: 20px; display: flex; flex-direction: column; gap: 8px; z-index: 30; }
            .toast { padding: 10px 14px; border-radius: 8px; display: flex; gap: 10px; align-items: center; }
            .toast button { background: none; border: none; color: inherit; cursor: pointer; }
            .toast-info { background: #73c0de; }
            .toast-success { background: #3ba272; }
            .toast-warning { background: #fc8452; }
            .toast-error { background: #ee6666; }
            "#}
        </style>
        <div class="symbol-chart-app">
            <Header />
            <div class="panel">
                <SearchPanel />
                <SelectionBar />
                <CatalogBrowser />
            </div>
            <Controls />
            <ChartPanel />
            <Show when=move || state.with(|s| s.settings_open)>
                <SettingsModal />
            </Show>
            <Toasts />
        </div>
    }
}

/// 📊 Title, API connection status and the settings entry point
#[component]
fn Header() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let state = shell.state();

    view! {
        <div class="panel header">
            <h1>"📈 Symbol Comparison"</h1>
            <div>
                <span class=move || {
                    if state.with(|s| s.connection.is_connected()) { "status-ok" } else { "status-bad" }
                }>
                    {move || state.with(|s| s.connection.label())}
                </span>
                " "
                <button class="btn" on:click=move |_| shell.dispatch(Action::OpenSettings)>"⚙ Settings"</button>
            </div>
        </div>
    }
}

#[component]
fn SearchPanel() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let state = shell.state();

    let on_input = {
        let shell = shell.clone();
        move |event: ev::Event| shell.dispatch(Action::SearchInput(event_target_value(&event)))
    };

    let on_keydown = {
        let shell = shell.clone();
        move |event: ev::KeyboardEvent| match event.key().as_str() {
            "Enter" => {
                event.prevent_default();
                let pick = state.with_untracked(|s| {
                    s.suggestions
                        .first()
                        .map(|info| info.identifier.to_string())
                        .unwrap_or_else(|| s.query.clone())
                });
                shell.dispatch(Action::AddSymbol(pick));
            }
            "Escape" => shell.dispatch(Action::HideSuggestions),
            _ => {}
        }
    };

    let on_blur = {
        let shell = shell.clone();
        move |_: ev::FocusEvent| shell.dispatch(Action::HideSuggestions)
    };

    let suggestions = move || {
        state
            .with(|s| s.suggestions.clone())
            .into_iter()
            .map(|info| {
                let shell = shell.clone();
                let identifier = info.identifier.to_string();
                let label = identifier.clone();
                // mousedown fires before the input loses focus
                view! {
                    <li class="suggestion" on:mousedown=move |_| shell.dispatch(Action::AddSymbol(identifier.clone()))>
                        <strong>{label}</strong>
                        <span>{info.display_name}</span>
                        <span class="market">{info.market}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="Search symbols (e.g. AAPL, ^GSPC)"
                prop:value=move || state.with(|s| s.query.clone())
                on:input=on_input
                on:keydown=on_keydown
                on:blur=on_blur
            />
            <Show when=move || state.with(|s| !s.suggestions.is_empty())>
                <ul class="suggestions">{suggestions.clone()}</ul>
            </Show>
        </div>
    }
}

#[component]
fn SelectionBar() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let state = shell.state();

    let clear = {
        let shell = shell.clone();
        move |_: ev::MouseEvent| shell.dispatch(Action::ClearSelection)
    };

    let chips = move || {
        state
            .with(|s| s.selection.iter().map(|symbol| symbol.to_string()).collect::<Vec<_>>())
            .into_iter()
            .map(|identifier| {
                let shell = shell.clone();
                let label = identifier.clone();
                view! {
                    <span class="chip">
                        {label}
                        <button class="btn" on:click=move |_| shell.dispatch(Action::RemoveSymbol(identifier.clone()))>"×"</button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="selection">
            {chips}
            <Show when=move || state.with(|s| !s.selection.is_empty())>
                <button class="btn" on:click=clear.clone()>"Clear all"</button>
            </Show>
        </div>
    }
}

/// Quick-add buttons grouped by catalog category
#[component]
fn CatalogBrowser() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let state = shell.state();

    let groups = move || {
        state
            .with(|s| {
                s.catalog
                    .categories()
                    .into_iter()
                    .map(|category| {
                        let identifiers = s
                            .catalog
                            .in_category(category)
                            .map(|info| info.identifier.to_string())
                            .collect::<Vec<_>>();
                        (category.to_string(), identifiers)
                    })
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .map(|(category, identifiers)| {
                let buttons = identifiers
                    .into_iter()
                    .map(|identifier| {
                        let shell = shell.clone();
                        let label = identifier.clone();
                        view! {
                            <button class="chip-add" on:click=move |_| shell.dispatch(Action::AddSymbol(identifier.clone()))>
                                {label}
                            </button>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="category">
                        <span class="market">{category}</span>
                        {buttons}
                    </div>
                }
            })
            .collect_view()
    };

    view! { <div class="catalog">{groups}</div> }
}

/// Period, chart type and the analyze trigger
#[component]
fn Controls() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let state = shell.state();

    let on_period = {
        let shell = shell.clone();
        move |event: ev::Event| {
            if let Ok(period) = event_target_value(&event).parse::<Period>() {
                shell.dispatch(Action::SetPeriod(period));
            }
        }
    };

    let on_chart_type = {
        let shell = shell.clone();
        move |event: ev::Event| {
            if let Ok(chart_type) = event_target_value(&event).parse::<ChartType>() {
                shell.dispatch(Action::SetChartType(chart_type));
            }
        }
    };

    let periods = Period::all()
        .map(|period| {
            view! {
                <option value=period.token().to_string() prop:selected=move || state.with(|s| s.period == period)>
                    {period.label()}
                </option>
            }
        })
        .collect_view();

    let chart_types = ChartType::iter()
        .map(|chart_type| {
            view! {
                <option
                    value=chart_type.token().to_string()
                    prop:selected=move || state.with(|s| s.chart_type == chart_type)
                >
                    {chart_type.to_string()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="panel controls">
            <label>"Period " <select on:change=on_period>{periods}</select></label>
            <label>"Chart " <select on:change=on_chart_type>{chart_types}</select></label>
            <button
                class="btn"
                disabled=move || state.with(|s| s.is_loading())
                on:click=move |_| shell.dispatch(Action::Analyze)
            >
                {move || if state.with(|s| s.is_loading()) { "⏳ Analyzing..." } else { "Analyze" }}
            </button>
        </div>
    }
}

/// 🎨 Chart host element plus the per-series legend
#[component]
fn ChartPanel() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let state = shell.state();

    let badge = move || match state.with(|s| s.data_mode) {
        DataMode::Demo => Some(view! { <span class="mode-badge">"Demo data"</span> }),
        DataMode::Live | DataMode::Empty => None,
    };

    let legend = move || {
        let chart_type = state.with(|s| s.chart_type);
        state
            .with(|s| s.chart_data.summaries())
            .into_iter()
            .enumerate()
            .map(|(index, summary)| {
                let swatch = format!("background: {}", palette_color(index).css());
                let value = match chart_type {
                    ChartType::Price => format!("{:.2}", summary.last_close),
                    ChartType::Percentage => format!("{:+.2}%", summary.change_pct),
                };
                view! {
                    <span>
                        <span class="swatch" style=swatch></span>
                        <strong>{summary.identifier.to_string()}</strong>
                        " " {value}
                        <span class="market">{format!(" ({} pts)", summary.points)}</span>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="panel">
            {badge}
            <div id=CHART_ELEMENT_ID class="chart"></div>
            <div class="legend">{legend}</div>
        </div>
    }
}

#[component]
fn SettingsModal() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let current = shell.state().with_untracked(|s| s.settings.clone());

    let api_url = create_rw_signal(current.api_base_url.unwrap_or_default());
    let auto_refresh = create_rw_signal(current.auto_refresh);
    let interval = create_rw_signal(current.refresh_interval_seconds.to_string());

    let save = {
        let shell = shell.clone();
        move |_: ev::MouseEvent| {
            // unparsable input falls below the minimum and is rejected by validation
            let refresh_interval_seconds = interval.get_untracked().trim().parse::<u32>().unwrap_or(0);
            shell.dispatch(Action::SaveSettings(Settings {
                api_base_url: Some(api_url.get_untracked()),
                auto_refresh: auto_refresh.get_untracked(),
                refresh_interval_seconds,
            }));
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>"Settings"</h3>
                <label>
                    "API base URL"
                    <input
                        type="url"
                        placeholder="http://localhost:8000/api"
                        prop:value=move || api_url.get()
                        on:input=move |event| api_url.set(event_target_value(&event))
                    />
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || auto_refresh.get()
                        on:change=move |event| auto_refresh.set(event_target_checked(&event))
                    />
                    " Auto-refresh"
                </label>
                <label>
                    "Refresh interval (seconds)"
                    <input
                        type="number"
                        min="5"
                        prop:value=move || interval.get()
                        on:input=move |event| interval.set(event_target_value(&event))
                    />
                </label>
                <button class="btn" on:click=save>"Save"</button>
                " "
                <button class="btn" on:click=move |_| shell.dispatch(Action::CloseSettings)>"Cancel"</button>
            </div>
        </div>
    }
}

#[component]
fn Toasts() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let state = shell.state();

    let toasts = move || {
        state
            .with(|s| s.notifications.clone())
            .into_iter()
            .map(|notification| {
                let shell = shell.clone();
                let id = notification.id;
                let class = format!("toast {}", notification.level.css_class());
                view! {
                    <div class=class>
                        <span>{notification.message}</span>
                        <button on:click=move |_| shell.dispatch(Action::DismissNotification(id))>"×"</button>
                    </div>
                }
            })
            .collect_view()
    };

    view! { <div class="toasts">{toasts}</div> }
}
