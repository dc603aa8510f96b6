use control_kit::prelude::*;
use leptos::*;

use crate::config::CatalogConfig;
use crate::interactions::{CallLog, CheckboxToggle, RadioToggle};
use crate::stories::{
    all_stories, find_story, Arrangement, ButtonArgs, ComponentKind, Interaction, Story, StoryArgs,
    LEADING_ICON_GLYPH, TRAILING_ICON_GLYPH,
};

fn button_view(args: ButtonArgs, calls: RwSignal<CallLog>) -> View {
    let declaration = args.declaration.clone();
    let content = if args.show_leading_icon || args.show_trailing_icon {
        view! {
            <span data-catalog-slot="icon-row">
                {args.show_leading_icon.then(|| view! { <span aria-hidden="true">{LEADING_ICON_GLYPH}</span> })}
                <span>{declaration.content.clone()}</span>
                {args.show_trailing_icon.then(|| view! { <span aria-hidden="true">{TRAILING_ICON_GLYPH}</span> })}
            </span>
        }
        .into_view()
    } else {
        declaration.content.clone().into_view()
    };

    view! {
        <Button
            variant=declaration.variant
            state=declaration.state
            is_disabled=declaration.is_disabled
            button_type=declaration.button_type
            on_click=Callback::new(move |_| calls.update(CallLog::record_click))
        >
            {content}
        </Button>
    }
    .into_view()
}

fn checkbox_view(declaration: CheckboxDeclaration, calls: RwSignal<CallLog>) -> View {
    view! {
        <Checkbox
            state=declaration.state
            label=declaration.show_label
            is_checked=declaration.is_checked
            is_disabled=declaration.is_disabled
            label_text=declaration.label_text
            on_click=Callback::new(move |_| calls.update(CallLog::record_click))
            on_keydown=Callback::new(move |_| calls.update(CallLog::record_keydown))
        />
    }
    .into_view()
}

fn radio_view(declaration: RadioDeclaration, calls: RwSignal<CallLog>) -> View {
    view! {
        <Radio
            state=declaration.state
            label=declaration.show_label
            description=declaration.show_description
            is_disabled=declaration.is_disabled
            label_text=declaration.label_text
            description_text=declaration.description_text
            on_click=Callback::new(move |_| calls.update(CallLog::record_click))
            on_keydown=Callback::new(move |_| calls.update(CallLog::record_keydown))
        />
    }
    .into_view()
}

fn toggle_checkbox_view(args: CheckboxDeclaration, calls: RwSignal<CallLog>) -> View {
    let model = create_rw_signal(CheckboxToggle::new(args));
    let declaration = Signal::derive(move || model.with(CheckboxToggle::declaration));

    view! {
        <Checkbox
            state=Signal::derive(move || declaration.get().state)
            label=Signal::derive(move || declaration.get().show_label)
            is_checked=Signal::derive(move || declaration.get().is_checked)
            is_disabled=Signal::derive(move || declaration.get().is_disabled)
            label_text=Signal::derive(move || declaration.get().label_text)
            on_click=Callback::new(move |_| {
                model.update(CheckboxToggle::click);
                calls.update(CallLog::record_click);
            })
            on_keydown=Callback::new(move |_| calls.update(CallLog::record_keydown))
        />
    }
    .into_view()
}

fn story_variant_view(args: StoryArgs, interaction: Interaction, calls: RwSignal<CallLog>) -> View {
    match (args, interaction) {
        (StoryArgs::Checkbox(args), Interaction::CheckboxToggle) => toggle_checkbox_view(args, calls),
        (StoryArgs::Button(args), _) => button_view(args, calls),
        (StoryArgs::Checkbox(args), _) => checkbox_view(args, calls),
        (StoryArgs::Radio(args), _) => radio_view(args, calls),
    }
}

fn arrangement_tokens(arrangement: Arrangement) -> (&'static str, Option<u8>) {
    match arrangement {
        Arrangement::Single => ("single", None),
        Arrangement::Row => ("row", None),
        Arrangement::Grid { columns } => ("grid", Some(columns)),
    }
}

#[component]
/// Canvas rendering one story's variants through the live controls.
pub fn StoryCanvas(
    story: Story,
    #[prop(optional, into)] layout: Option<String>,
    calls: RwSignal<CallLog>,
) -> impl IntoView {
    let (arrangement, columns) = arrangement_tokens(story.arrangement);
    let interaction = story.interaction;
    let variants = story
        .variants
        .into_iter()
        .map(|args| story_variant_view(args, interaction, calls))
        .collect_view();

    view! {
        <section
            class="catalog-canvas"
            data-catalog-story=story.id
            data-catalog-layout=layout
            data-catalog-arrangement=arrangement
            data-catalog-columns=columns
        >
            {variants}
        </section>
    }
}

#[component]
/// Story catalog: story index, canvas, call counters, and args panel.
pub fn ControlCatalog(
    /// Story to open instead of the configured default.
    #[prop(optional, into)]
    story_id: Option<String>,
) -> impl IntoView {
    let config = CatalogConfig::load();
    let stories = all_stories();
    let initial = story_id
        .filter(|id| {
            let known = find_story(id).is_some();
            if !known {
                logging::warn!("unknown story `{id}` requested, using default");
            }
            known
        })
        .or_else(|| config.default_story.clone())
        .or_else(|| stories.first().map(|story| story.id.clone()))
        .unwrap_or_default();

    let selected = create_rw_signal(initial);
    let calls = create_rw_signal(CallLog::default());
    let layout = config.layout.token();
    let show_args = config.show_args;

    let index = ComponentKind::ALL
        .iter()
        .map(|kind| {
            let entries = stories
                .iter()
                .filter(|story| story.component == *kind)
                .map(|story| {
                    let id = story.id.clone();
                    let is_current = {
                        let id = id.clone();
                        move || selected.get() == id
                    };
                    view! {
                        <li>
                            <button
                                type="button"
                                class="catalog-index__entry"
                                aria-current=move || is_current().then_some("page")
                                on:click=move |_| {
                                    selected.set(id.clone());
                                    calls.set(CallLog::default());
                                }
                            >
                                {story.name}
                            </button>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <li>
                    <span class="catalog-index__group">{kind.title()}</span>
                    <ul>{entries}</ul>
                </li>
            }
        })
        .collect_view();

    let current = Signal::derive(move || find_story(&selected.get()));

    view! {
        <div class="catalog-root">
            <nav class="catalog-index" aria-label="Stories">
                <h1>{config.title.clone()}</h1>
                <ul>{index}</ul>
            </nav>
            <main class="catalog-main">
                {move || match current.get() {
                    Some(story) => view! { <StoryCanvas story layout=layout calls /> }.into_view(),
                    None => view! { <p class="catalog-empty">"No story selected."</p> }.into_view(),
                }}
                <p class="catalog-calls">
                    {move || {
                        let log = calls.get();
                        format!("onClick: {} / onKeyDown: {}", log.clicks, log.keydowns)
                    }}
                </p>
                <Show when=move || show_args fallback=|| ()>
                    <pre class="catalog-args">{move || args_json(current.get())}</pre>
                </Show>
            </main>
        </div>
    }
}

fn args_json(story: Option<Story>) -> String {
    let Some(story) = story else {
        return String::new();
    };
    match serde_json::to_string_pretty(&story.variants) {
        Ok(json) => json,
        Err(err) => {
            logging::warn!("story args serialize failed: {err}");
            String::new()
        }
    }
}

#[component]
/// Demo page showcasing the controls outside the catalog.
pub fn DemoPage() -> impl IntoView {
    let reminders = create_rw_signal(RadioToggle::medication_reminders());
    let reminder = Signal::derive(move || reminders.with(RadioToggle::declaration));

    view! {
        <main class="demo-page">
            <section class="demo-section">
                <h1>"Control Button"</h1>
                <div class="demo-row">
                    <Button variant=ButtonVariant::Primary>"Primary"</Button>
                    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                    <Button variant=ButtonVariant::Tertiary>"Tertiary"</Button>
                    <Button variant=ButtonVariant::Primary is_disabled=true>"Disabled"</Button>
                </div>
            </section>
            <section class="demo-section">
                <h2>"Control Radio"</h2>
                <Radio
                    state=Signal::derive(move || reminder.get().state)
                    label=Signal::derive(move || reminder.get().show_label)
                    description=Signal::derive(move || reminder.get().show_description)
                    is_disabled=Signal::derive(move || reminder.get().is_disabled)
                    label_text=Signal::derive(move || reminder.get().label_text)
                    description_text=Signal::derive(move || reminder.get().description_text)
                    on_click=Callback::new(move |_| reminders.update(RadioToggle::click))
                />
            </section>
        </main>
    }
}
