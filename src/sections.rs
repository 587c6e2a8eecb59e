use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::nav::scroll_to_section;
use portfolio_core::{
    tag_vocabulary, visible_projects, Project, SectionId, TagFilter, EXPERIENCE, PROFILE,
    PROJECTS, SKILL_GROUPS,
};

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    let on_work = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Projects));
    let on_contact = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact));
    html! {
        <section id={SectionId::Home.as_str()} class="section hero">
            <p class="eyebrow">{ PROFILE.role }</p>
            <h1>{ PROFILE.name }</h1>
            <p class="tagline">{ PROFILE.tagline }</p>
            <div class="hero-actions">
                <button type="button" class="button primary" onclick={on_work}>
                    { "View projects" }
                </button>
                <button type="button" class="button" onclick={on_contact}>
                    { "Get in touch" }
                </button>
            </div>
        </section>
    }
}

#[function_component(About)]
pub(crate) fn about() -> Html {
    let paragraphs: Html = PROFILE
        .summary
        .iter()
        .map(|paragraph| html! { <p>{ *paragraph }</p> })
        .collect();
    html! {
        <section id={SectionId::About.as_str()} class="section">
            <h2>{ SectionId::About.label() }</h2>
            { paragraphs }
            <p class="muted">{ PROFILE.location }</p>
        </section>
    }
}

#[function_component(Skills)]
pub(crate) fn skills() -> Html {
    let groups: Html = SKILL_GROUPS
        .iter()
        .map(|group| {
            let items: Html = group
                .items
                .iter()
                .map(|item| html! { <li class="chip">{ *item }</li> })
                .collect();
            html! {
                <div class="card">
                    <h3>{ group.title }</h3>
                    <ul class="chips">{ items }</ul>
                </div>
            }
        })
        .collect();
    html! {
        <section id={SectionId::Skills.as_str()} class="section">
            <h2>{ SectionId::Skills.label() }</h2>
            <div class="grid">{ groups }</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectsProps {
    pub(crate) filter: TagFilter,
    pub(crate) on_filter: Callback<TagFilter>,
    pub(crate) on_open: Callback<&'static Project>,
}

#[function_component(Projects)]
pub(crate) fn projects(props: &ProjectsProps) -> Html {
    let vocabulary = use_memo((), |_| tag_vocabulary(PROJECTS));
    let visible = use_memo(props.filter.clone(), |filter| {
        visible_projects(PROJECTS, filter)
    });
    let filters: Html = vocabulary
        .iter()
        .map(|filter| {
            let selected = *filter == props.filter;
            let next = filter.clone();
            let onclick = props.on_filter.reform(move |_: MouseEvent| next.clone());
            html! {
                <button
                    type="button"
                    class={classes!("filter", selected.then_some("selected"))}
                    aria-pressed={selected.to_string()}
                    {onclick}
                >
                    { filter.label() }
                </button>
            }
        })
        .collect();
    let cards: Html = visible
        .iter()
        .copied()
        .map(|project| {
            let onclick = props.on_open.reform(move |_: MouseEvent| project);
            let tags: Html = project
                .tags
                .iter()
                .map(|tag| html! { <span class="tag">{ *tag }</span> })
                .collect();
            html! {
                <button type="button" key={project.title} class="card project-card" {onclick}>
                    <h3>{ project.title }</h3>
                    <p>{ project.summary }</p>
                    <div class="tags">{ tags }</div>
                </button>
            }
        })
        .collect();
    html! {
        <section id={SectionId::Projects.as_str()} class="section">
            <h2>{ SectionId::Projects.label() }</h2>
            <div class="filters" role="toolbar" aria-label="Filter projects">{ filters }</div>
            <div class="grid">{ cards }</div>
        </section>
    }
}

#[function_component(ExperienceSection)]
pub(crate) fn experience_section() -> Html {
    let entries: Html = EXPERIENCE
        .iter()
        .map(|entry| {
            let highlights: Html = entry
                .highlights
                .iter()
                .map(|line| html! { <li>{ *line }</li> })
                .collect();
            html! {
                <li class="timeline-entry">
                    <div class="timeline-head">
                        <h3>{ entry.role }{ " \u{00b7} " }{ entry.company }</h3>
                        <span class="muted">{ entry.period }</span>
                    </div>
                    <ul>{ highlights }</ul>
                </li>
            }
        })
        .collect();
    html! {
        <section id={SectionId::Experience.as_str()} class="section">
            <h2>{ SectionId::Experience.label() }</h2>
            <ol class="timeline">{ entries }</ol>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContactProps {
    pub(crate) email: AttrValue,
    pub(crate) on_copy: Callback<()>,
    pub(crate) on_sent: Callback<()>,
}

#[function_component(Contact)]
pub(crate) fn contact(props: &ContactProps) -> Html {
    let on_copy = props.on_copy.reform(|_: MouseEvent| ());
    let on_submit = {
        let on_sent = props.on_sent.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(form) = event.target_dyn_into::<HtmlFormElement>() {
                form.reset();
            }
            on_sent.emit(());
        })
    };
    html! {
        <section id={SectionId::Contact.as_str()} class="section">
            <h2>{ SectionId::Contact.label() }</h2>
            <div class="contact-email">
                <a href={format!("mailto:{}", props.email)}>{ props.email.clone() }</a>
                <button type="button" class="button" onclick={on_copy}>{ "Copy email" }</button>
            </div>
            <form class="contact-form" onsubmit={on_submit}>
                <label>
                    { "Name" }
                    <input name="name" type="text" required={true} />
                </label>
                <label>
                    { "Email" }
                    <input name="email" type="email" required={true} />
                </label>
                <label>
                    { "Message" }
                    <textarea name="message" rows="5" required={true} />
                </label>
                <button type="submit" class="button primary">{ "Send" }</button>
            </form>
        </section>
    }
}
