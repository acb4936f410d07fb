use super::{classes, Template};
use crate::vdom::VNode;
use zenith_schema::{
    Align, ContactContent, CtaContent, FooterContent, HeaderContent, HeroContent,
    ImagePosition, ImageTextContent, NewsletterContent, VideoContent,
};

const PRIMARY_PILL: &str = "bg-blue-600 text-white px-5 py-2.5 rounded-full font-medium hover:bg-blue-700 transition shadow-md";
const HERO_BUTTON: &str = "bg-blue-600 text-white px-8 py-4 rounded-full text-lg font-bold hover:bg-blue-700 transition shadow-xl hover:-translate-y-1 inline-block";
const FORM_INPUT: &str = "w-full px-4 py-3 rounded-xl border border-gray-200";

pub(crate) fn header(t: &Template, c: &HeaderContent) -> VNode {
    let nav_class = if t.is_mobile() { "hidden" } else { "hidden md:flex" };
    let menu_class = if t.is_mobile() {
        "text-2xl cursor-pointer"
    } else {
        "md:hidden text-2xl cursor-pointer"
    };

    let links = c.nav_links.iter().enumerate().map(|(i, link)| {
        t.item(
            "a",
            "font-medium hover:text-blue-600 transition-colors",
            "navLinks",
            i,
            "text",
            &link.text,
        )
        .with_attr("href", link.url.as_str())
    });

    let nav = VNode::element("nav")
        .with_class(classes(&[nav_class, "gap-8 items-center"]))
        .with_children(links)
        .with_child_if(c.show_theme_toggle, || {
            VNode::element("div")
                .with_class("w-10 h-10 rounded-full bg-gray-100 flex items-center justify-center cursor-pointer hover:bg-gray-200 transition")
                .with_attr("data-role", "theme-toggle")
                .with_child(VNode::element("span").with_class("w-4 h-4 rounded-full bg-gray-400"))
        })
        .with_child(
            t.field("a", PRIMARY_PILL, "buttonText", &c.button_text)
                .with_attr("href", c.button_url.as_str()),
        );

    VNode::element("div")
        .with_class("container mx-auto px-6 flex items-center justify-between flex-wrap gap-4 md:gap-0")
        .with_child(t.field("h2", "text-2xl font-bold tracking-tight", "logoText", &c.logo_text))
        .with_child(nav)
        .with_child(VNode::element("div").with_class(menu_class).with_child(VNode::text("☰")))
}

pub(crate) fn hero(t: &Template, c: &HeroContent) -> VNode {
    let align = match c.alignment {
        Align::Center => "text-center items-center",
        Align::Right => "text-right items-end",
        Align::Left => "text-left items-start",
    };

    let heading = t.field(
        "h1",
        "text-5xl md:text-7xl font-extrabold tracking-tight leading-[1.1]",
        "heading",
        &c.heading,
    );
    let subheading = t.field(
        "p",
        "text-xl md:text-2xl opacity-70 max-w-2xl leading-relaxed",
        "subheading",
        &c.subheading,
    );

    VNode::element("div")
        .with_class(classes(&["container mx-auto px-6 flex flex-col gap-6 py-12 md:py-20", align]))
        .with_child(t.placeholder(heading, "Enter Heading"))
        .with_child(t.placeholder(subheading, "Enter Subheading"))
        .with_child_if(c.show_button, || {
            VNode::element("div").with_class("mt-6").with_child(
                t.field("a", HERO_BUTTON, "buttonText", &c.button_text)
                    .with_attr("href", c.button_url.as_str()),
            )
        })
}

pub(crate) fn video(t: &Template, c: &VideoContent) -> VNode {
    let frame = VNode::element("iframe")
        .with_class("w-full h-full")
        .with_attr("src", c.video_url.as_str())
        .with_attr("title", "Video player")
        .with_attr("frameborder", "0")
        .with_attr(
            "allow",
            "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
        )
        .with_attr("allowfullscreen", "");

    VNode::element("div")
        .with_class("container mx-auto px-6 text-center")
        .with_child(t.field("h2", "text-3xl md:text-4xl font-bold mb-8", "heading", &c.heading))
        .with_child(
            VNode::element("div")
                .with_class("relative w-full max-w-4xl mx-auto aspect-video rounded-2xl overflow-hidden shadow-2xl bg-black")
                .with_child(frame),
        )
        .with_child(t.field(
            "p",
            "mt-8 text-xl opacity-70 max-w-2xl mx-auto",
            "description",
            &c.description,
        ))
}

pub(crate) fn cta(t: &Template, c: &CtaContent) -> VNode {
    VNode::element("div")
        .with_class("container mx-auto px-6 text-center")
        .with_child(t.field("h2", "text-3xl md:text-5xl font-bold mb-6", "heading", &c.heading))
        .with_child(t.field(
            "p",
            "text-xl opacity-80 mb-10 max-w-2xl mx-auto",
            "subheading",
            &c.subheading,
        ))
        .with_child(t.field(
            "button",
            "bg-white text-blue-900 px-10 py-4 rounded-full font-bold shadow-xl hover:shadow-2xl hover:-translate-y-1 transition duration-200 text-lg",
            "buttonText",
            &c.button_text,
        ))
}

pub(crate) fn contact(t: &Template, c: &ContactContent) -> VNode {
    let grid = if t.is_mobile() {
        "grid-cols-1"
    } else {
        "grid-cols-1 md:grid-cols-2"
    };

    let intro = VNode::element("div")
        .with_child(t.field("h2", "text-4xl font-bold mb-6", "heading", &c.heading))
        .with_child(t.field("p", "text-xl text-gray-600 mb-8", "subheading", &c.subheading))
        .with_child(
            VNode::element("div")
                .with_class("flex items-center gap-4 text-gray-600")
                .with_child(VNode::element("span").with_child(VNode::text("contact@example.com"))),
        );

    let label = |text: &str| {
        VNode::element("label")
            .with_class("block text-sm font-medium text-gray-700 mb-1")
            .with_child(VNode::text(text))
    };

    let submit = VNode::element("button")
        .with_class("w-full py-4 bg-blue-600 text-white rounded-xl font-bold hover:bg-blue-700 transition flex items-center justify-center gap-2")
        .with_child(t.field("span", "", "buttonText", &c.button_text))
        .with_child(
            VNode::element("span")
                .with_attr("data-icon", "send")
                .as_chrome(),
        );

    let form = VNode::element("form")
        .with_class("bg-white p-8 rounded-3xl shadow-lg border border-gray-100 space-y-4")
        .with_child(
            VNode::element("div").with_child(label("Email Address")).with_child(
                VNode::element("input")
                    .with_class(FORM_INPUT)
                    .with_attr("type", "email")
                    .with_attr("placeholder", c.email_placeholder.as_str()),
            ),
        )
        .with_child(
            VNode::element("div").with_child(label("Message")).with_child(
                VNode::element("textarea")
                    .with_class(FORM_INPUT)
                    .with_attr("rows", "4")
                    .with_attr("placeholder", c.message_placeholder.as_str()),
            ),
        )
        .with_child(submit);

    VNode::element("div").with_class("container mx-auto px-6").with_child(
        VNode::element("div")
            .with_class(classes(&["grid gap-12 items-center", grid]))
            .with_child(intro)
            .with_child(form),
    )
}

pub(crate) fn footer(t: &Template, c: &FooterContent) -> VNode {
    let brand_class = if t.is_mobile() {
        "text-center"
    } else {
        "text-center md:text-left"
    };

    let links = c.links.iter().enumerate().map(|(i, link)| {
        t.item(
            "a",
            "text-sm font-medium opacity-60 hover:opacity-100 transition",
            "links",
            i,
            "text",
            &link.text,
        )
        .with_attr("href", link.url.as_str())
    });

    let row = VNode::element("div")
        .with_class(classes(&[
            "flex justify-between items-center gap-8 border-t border-current/10 pt-12",
            t.flex_row(),
        ]))
        .with_child(
            VNode::element("div")
                .with_class(brand_class)
                .with_child(
                    VNode::element("span")
                        .with_class("font-bold text-xl block mb-2")
                        .with_child(VNode::text("Zenith")),
                )
                .with_child(t.field("p", "text-sm opacity-60", "copyright", &c.copyright)),
        )
        .with_child(
            VNode::element("div")
                .with_class("flex gap-8 flex-wrap justify-center")
                .with_children(links),
        );

    VNode::element("div")
        .with_class("container mx-auto px-6")
        .with_child(row)
}

pub(crate) fn newsletter(t: &Template, c: &NewsletterContent) -> VNode {
    let form = VNode::element("div")
        .with_class(classes(&["flex gap-3 max-w-md mx-auto", t.flex_row()]))
        .with_child(
            VNode::element("input")
                .with_class("flex-1 px-6 py-3 rounded-full text-gray-900 focus:outline-none focus:ring-2 focus:ring-white/50")
                .with_attr("type", "email")
                .with_attr("placeholder", c.placeholder.as_str()),
        )
        .with_child(t.field(
            "button",
            "px-8 py-3 bg-white text-blue-600 rounded-full font-bold hover:bg-blue-50 transition",
            "buttonText",
            &c.button_text,
        ));

    let inner = VNode::element("div")
        .with_class("relative z-10 max-w-2xl mx-auto")
        .with_child(t.field("h2", "text-3xl md:text-4xl font-bold mb-4", "heading", &c.heading))
        .with_child(t.field("p", "text-blue-100 text-lg mb-8", "subheading", &c.subheading))
        .with_child(form);

    VNode::element("div").with_class("container mx-auto px-6").with_child(
        VNode::element("div")
            .with_class("bg-blue-600 rounded-3xl p-12 text-center text-white relative overflow-hidden")
            .with_child(inner),
    )
}

pub(crate) fn image_text(t: &Template, c: &ImageTextContent) -> VNode {
    let direction = if t.is_mobile() {
        "flex-col"
    } else {
        match c.image_position {
            ImagePosition::Right => "flex-col md:flex-row",
            ImagePosition::Left => "flex-col md:flex-row-reverse",
        }
    };

    let copy = VNode::element("div")
        .with_class("flex-1 space-y-8")
        .with_child(t.field(
            "h2",
            "text-4xl md:text-5xl font-bold leading-tight",
            "heading",
            &c.heading,
        ))
        .with_child(t.field("p", "text-lg opacity-70 leading-relaxed", "text", &c.text))
        .with_child(
            VNode::element("button")
                .with_class("text-blue-600 font-bold inline-flex items-center gap-2 text-lg")
                .with_child(t.field("span", "", "buttonText", &c.button_text))
                .with_child(VNode::element("span").with_child(VNode::text("→"))),
        );

    let image = VNode::element("div").with_class("flex-1 w-full").with_child(
        VNode::element("img")
            .with_class("w-full h-auto rounded-3xl shadow-2xl object-cover aspect-video")
            .with_attr("src", c.image_src.as_str())
            .with_attr("alt", "Feature"),
    );

    VNode::element("div").with_class("container mx-auto px-6").with_child(
        VNode::element("div")
            .with_class(classes(&["flex gap-12 items-center", direction]))
            .with_child(copy)
            .with_child(image),
    )
}
