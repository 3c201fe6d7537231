use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: Icon::Brain,
        title: "AI & Machine Learning",
        description: "Custom AI solutions that drive your business growth",
    },
    Service {
        icon: Icon::Code,
        title: "Software Development",
        description: "End-to-end software development services tailored to your needs",
    },
    Service {
        icon: Icon::Megaphone,
        title: "Digital Marketing",
        description: "Boost your online presence with our marketing strategies",
    },
    Service {
        icon: Icon::Palette,
        title: "UI/UX Design",
        description: "Designs that enhance user experience and engagement",
    },
    Service {
        icon: Icon::Database,
        title: "Data Analytics",
        description: "Data-driven insights to make informed decisions",
    },
    Service {
        icon: Icon::Mail,
        title: "Customer Support",
        description: "24/7 support to assist your customers anytime",
    },
];

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <div class="service-card-glow"></div>
            <div class="service-card-body">
                <div class="service-card-icon">
                    <IconView icon={props.icon} />
                </div>
                <h3 class="gradient-text">{ props.title.clone() }</h3>
                <p>{ props.description.clone() }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_titles_are_unique() {
        let mut titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), SERVICES.len());
    }
}
