use dioxus::prelude::*;

use crate::icons::*;
use crate::Icon;

/// Glyph for a route's icon key.
#[component]
pub fn MenuIcon(name: String, #[props(default = 16)] size: u32) -> Element {
    match name.as_str() {
        "house" => rsx! { Icon { icon: FaHouse, width: size, height: size } },
        "school" => rsx! { Icon { icon: FaSchool, width: size, height: size } },
        "avatar" => rsx! { Icon { icon: FaUserTie, width: size, height: size } },
        "user-filled" => rsx! { Icon { icon: FaUsers, width: size, height: size } },
        "reading" => rsx! { Icon { icon: FaBookOpen, width: size, height: size } },
        "document" => rsx! { Icon { icon: FaFileLines, width: size, height: size } },
        "edit" => rsx! { Icon { icon: FaPenToSquare, width: size, height: size } },
        "pie-chart" => rsx! { Icon { icon: FaChartPie, width: size, height: size } },
        "user" => rsx! { Icon { icon: FaUser, width: size, height: size } },
        _ => rsx! { Icon { icon: FaCircle, width: size, height: size } },
    }
}
