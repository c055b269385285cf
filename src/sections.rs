use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::PROFILE;
use crate::constants::CV_DONE_RESET_MS;
use crate::content::*;
use crate::lazy::{Card3D, LazySection};
use crate::nav::scroll_to_section;
use crate::resume;
use crate::state::{PageState, ResumeStatus};

#[component]
fn SectionTag(label: &'static str) -> impl IntoView {
    view! { <div class="section-tag"><span>{label}</span></div> }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-card">
                <p class="sidebar-role">"Full-Stack Web Developer"</p>
                <div class="sidebar-photo">
                    <img src="/Profile.jpeg" alt=format!("{} profile", PROFILE.name) loading="lazy" />
                </div>
                <a class="sidebar-line" href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                <p class="sidebar-line">{PROFILE.location}</p>
                <p class="sidebar-copy">{PROFILE.copyright}</p>
                <div class="socials">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|&(label, url)| view! { <a class="social" href=url aria-label=label>{label.chars().next().map(String::from).unwrap_or_default()}</a> })
                        .collect_view()}
                </div>
                <button class="btn btn-primary btn-round" on:click=move |_| scroll_to_section("contact")>
                    "HIRE ME!"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Hero(state: PageState) -> impl IntoView {
    let status = state.resume;

    let on_cv = move |_: leptos::ev::MouseEvent| {
        if status.get_untracked().is_busy() {
            return;
        }
        status.set(ResumeStatus::Generating);
        spawn_local(async move {
            match resume::download_resume().await {
                Ok(_) => {
                    status.set(ResumeStatus::Done);
                    gloo_timers::callback::Timeout::new(CV_DONE_RESET_MS, move || {
                        if status.get_untracked() == ResumeStatus::Done {
                            status.set(ResumeStatus::Idle);
                        }
                    })
                    .forget();
                }
                Err(e) => {
                    log::error!("CV generation failed: {}", e);
                    status.set(ResumeStatus::Failed);
                }
            }
        });
    };

    view! {
        <section id="home" class="section hero">
            <SectionTag label="INTRODUCE" />
            <h1 class="hero-title">
                "Say Hi from "<span class="accent strong">"Ramesh"</span>","<br />
                <span class="gradient-text">{PROFILE.title}</span>
            </h1>
            <p class="hero-intro">{HERO_INTRO}</p>
            <div class="hero-actions">
                <button
                    class=move || status.get().class()
                    disabled=move || status.get().is_busy()
                    on:click=on_cv
                >
                    {move || status.get().label()}
                </button>
                <button class="btn btn-outline" on:click=move |_| scroll_to_section("projects")>
                    "View Projects"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <SectionTag label="ABOUT ME" />
            <h2 class="section-title">"Crafting Digital "<span class="accent">"Excellence"</span></h2>
            <div class="grid grid-2">
                {ABOUT_CARDS
                    .iter()
                    .map(|&(title, text)| view! {
                        <Card3D>
                            <div class="card">
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        </Card3D>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section" aria-label="Technical Skills">
            <SectionTag label="SKILLS" />
            <h2 class="section-title">"Technical "<span class="accent">"Expertise"</span></h2>
            <div class="grid grid-3">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| view! {
                        <Card3D>
                            <div class="card skill">
                                <div class="skill-head">
                                    <span class="skill-badge" style=format!("color: {}", skill.color)>
                                        {skill.name.chars().next().map(String::from).unwrap_or_default()}
                                    </span>
                                    <div>
                                        <h3>{skill.name}</h3>
                                        <p class="muted">{format!("{}% Proficiency", skill.level)}</p>
                                    </div>
                                </div>
                                <div class="bar">
                                    <div
                                        class="bar-fill"
                                        style=format!("width: {}%; transition-delay: {:.1}s", skill.level, i as f64 * 0.1)
                                    ></div>
                                </div>
                            </div>
                        </Card3D>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let education = EDUCATION.iter().map(|e| {
        view! {
            <Card3D>
                <div class="card timeline">
                    <span class="period period-edu">{e.period}</span>
                    <div>
                        <h3>{e.degree}</h3>
                        <p class="muted">{e.school}</p>
                        <p>{e.desc}</p>
                    </div>
                </div>
            </Card3D>
        }
    });
    let jobs = EXPERIENCES.iter().map(|e| {
        view! {
            <Card3D>
                <div class="card timeline">
                    <span class="period">{e.period}</span>
                    <div>
                        <h3>{e.role}</h3>
                        <p class="muted">{e.company}</p>
                        <p>{e.desc}</p>
                    </div>
                </div>
            </Card3D>
        }
    });

    view! {
        <section id="experience" class="section" aria-label="Work Experience">
            <SectionTag label="EXPERIENCE" />
            <h2 class="section-title">"Work & "<span class="accent">"Education"</span></h2>
            <div class="stack">
                {education.collect_view()}
                {jobs.collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section" aria-label="Services Offered">
            <SectionTag label="SERVICES" />
            <h2 class="section-title">"What I "<span class="accent">"Offer"</span></h2>
            <LazySection class="grid grid-3">
                {SERVICES
                    .iter()
                    .map(|s| view! {
                        <Card3D>
                            <div class="card">
                                <h3>{s.title}</h3>
                                <p>{s.desc}</p>
                                <ul class="muted">
                                    {s.points.iter().map(|p| view! { <li>{format!("• {}", p)}</li> }).collect_view()}
                                </ul>
                            </div>
                        </Card3D>
                    })
                    .collect_view()}
            </LazySection>
            <div class="grid grid-4 stats">
                {STATS
                    .iter()
                    .map(|s| view! {
                        <Card3D>
                            <div class="card stat">
                                <div class="stat-value" style=format!("color: {}", s.color)>{s.value}</div>
                                <p>{s.label}</p>
                            </div>
                        </Card3D>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section" aria-label="Portfolio Projects">
            <SectionTag label="PROJECTS" />
            <h2 class="section-title">"Featured "<span class="accent">"Work"</span></h2>
            <LazySection class="grid grid-2">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        let link = (!p.url.is_empty()).then(|| view! {
                            <a class="project-link" href=p.url target="_blank" rel="noopener noreferrer">"↗"</a>
                        });
                        view! {
                            <Card3D>
                                <div class="card project">
                                    <div class="project-shot">
                                        <img src=p.image alt=format!("{} - {} screenshot", p.title, p.kind) loading="lazy" />
                                        {link}
                                    </div>
                                    <div class="project-body">
                                        <span class="chip">{p.kind}</span>
                                        <h3>{p.title}</h3>
                                        <p>{p.desc}</p>
                                        <div class="tags">
                                            {p.tech_tags().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                                        </div>
                                    </div>
                                </div>
                            </Card3D>
                        }
                    })
                    .collect_view()}
            </LazySection>
        </section>
    }
}
