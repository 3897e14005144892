//! First-run dashboard

use startpage_core::domain::{
    Column, Dashboard, FlowButton, Group, Item, ItemBody, Startpage, WidgetType,
};

pub fn startpage() -> Startpage {
    Startpage::new(home_dashboard())
}

fn home_dashboard() -> Dashboard {
    Dashboard::new("home", "Home").with_columns([
        Column::new("col-daily", "Daily").with_groups([
            Group::links("grp-news", "News").with_items([
                Item::link("lnk-hn", "Hacker News", "https://news.ycombinator.com"),
                Item::link("lnk-lobsters", "Lobsters", "https://lobste.rs"),
                Item::separator("sep-news"),
                Item::link("lnk-lwn", "LWN", "https://lwn.net"),
            ]),
            Group::links("grp-dev", "Development").with_items([
                Item::link("lnk-crates", "crates.io", "https://crates.io"),
                Item::link("lnk-docs", "docs.rs", "https://docs.rs"),
            ]),
        ]),
        Column::new("col-home", "Home").with_groups([
            Group::widget("grp-homey", "Living room", WidgetType::HomeyCustom).with_items([
                Item::new(
                    "cap-lamp",
                    ItemBody::HomeyCapability {
                        device_id: "lamp".into(),
                        capability_id: "onoff".into(),
                        label: Some("Floor lamp".into()),
                    },
                ),
                Item::text("txt-scenes", "Scenes"),
                Item::new(
                    "btn-scenes",
                    ItemBody::ButtonHolder {
                        buttons: vec![
                            FlowButton {
                                id: "btn-movie".into(),
                                label: "Movie".into(),
                                flow_id: "flow-movie".into(),
                            },
                            FlowButton {
                                id: "btn-night".into(),
                                label: "Night".into(),
                                flow_id: "flow-night".into(),
                            },
                        ],
                    },
                ),
            ]),
            Group::widget("grp-clock", "Clock", WidgetType::Clock),
        ]),
        Column::new("col-later", "Later"),
    ])
}
