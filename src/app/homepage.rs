use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::PORTFOLIO;

use super::about::About;
use super::contact::Contact;
use super::experience::Experience;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PORTFOLIO.personal.title.clone() />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Experience />
        <Contact />
    }
}
