use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconView};
use crate::config::{self, NavItem};
use crate::state::menu::{MenuAction, MenuState};
use crate::state::scroll::use_scroll_state;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let scroll = use_scroll_state();

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let desktop_item = |item: &NavItem| {
        let on_navigate = props.on_navigate.clone();
        let section = item.section;
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(section.to_string()));
        html! {
            <button key={item.name} class="nav-link" {onclick}>
                { item.name }
                <span class="nav-link-underline"></span>
            </button>
        }
    };

    let mobile_item = |item: &NavItem| {
        let on_navigate = props.on_navigate.clone();
        let menu = menu.clone();
        let section = item.section;
        let onclick = Callback::from(move |_: MouseEvent| {
            on_navigate.emit(section.to_string());
            menu.dispatch(MenuAction::ItemSelected);
        });
        html! {
            <button key={item.name} class="mobile-nav-link" {onclick}>
                { item.name }
            </button>
        }
    };

    html! {
        <nav class={classes!("top-nav", scroll.is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-bar">
                    <div class="nav-logo">
                        <IconView icon={Icon::Globe} size={28} class="brand-icon" />
                        <span class="gradient-text">{ config::BRAND_NAME }</span>
                    </div>

                    <div class="nav-right">
                        { for config::NAV_ITEMS.iter().map(desktop_item) }
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        <IconView icon={if menu.is_open() { Icon::X } else { Icon::Menu }} />
                    </button>
                </div>

                if menu.is_open() {
                    <div class="mobile-menu">
                        { for config::NAV_ITEMS.iter().map(mobile_item) }
                    </div>
                }
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .nav-bar {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 4rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .brand-icon {
                    color: #2563eb;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    position: relative;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    color: #4b5563;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #2563eb;
                }
                .nav-link-underline {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 0;
                    height: 2px;
                    background: #2563eb;
                    transition: width 0.2s ease;
                }
                .nav-link:hover .nav-link-underline {
                    width: 100%;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #4b5563;
                }
                .mobile-menu {
                    display: none;
                    padding-bottom: 1rem;
                }
                .mobile-nav-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.5rem 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #4b5563;
                }
                .mobile-nav-link:hover {
                    background: #f3f4f6;
                }
                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }
                    .burger-menu,
                    .mobile-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
