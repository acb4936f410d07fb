use super::{classes, Template};
use crate::vdom::VNode;
use zenith_schema::{
    resolve_icon, BlogContent, FaqContent, FeaturesContent, GalleryContent, PricingContent,
    TeamContent, TestimonialsContent,
};

fn container() -> VNode {
    VNode::element("div").with_class("container mx-auto px-6")
}

pub(crate) fn features(t: &Template, c: &FeaturesContent) -> VNode {
    let cards = c.items.iter().enumerate().map(|(i, item)| {
        VNode::element("div")
            .with_class("p-8 rounded-2xl border border-gray-100 bg-white/50 shadow-sm hover:shadow-xl transition-all duration-300 hover:-translate-y-1")
            .with_child(
                VNode::element("div")
                    .with_class("w-14 h-14 bg-blue-50 text-blue-600 rounded-xl flex items-center justify-center mb-6")
                    .with_attr("data-icon", resolve_icon(&item.icon)),
            )
            .with_child(t.item("h3", "text-xl font-bold mb-3", "items", i, "title", &item.title))
            .with_child(t.item(
                "p",
                "text-gray-600 leading-relaxed",
                "items",
                i,
                "description",
                &item.description,
            ))
    });

    container()
        .with_child(t.title_row("text-center mb-16", "text-3xl md:text-4xl font-bold mb-4", &c.heading))
        .with_child(
            VNode::element("div")
                .with_class(classes(&["grid gap-8", t.grid_3()]))
                .with_children(cards),
        )
}

pub(crate) fn testimonials(t: &Template, c: &TestimonialsContent) -> VNode {
    let cards = c.items.iter().enumerate().map(|(i, item)| {
        let stars = VNode::element("div")
            .with_class("text-yellow-400 mb-4 flex gap-1")
            .with_children((0..5).map(|_| VNode::element("span").with_child(VNode::text("★"))))
            .as_chrome();

        let person = VNode::element("div")
            .with_class("flex items-center gap-3")
            .with_child(VNode::element("div").with_class("w-10 h-10 rounded-full bg-gray-300"))
            .with_child(
                VNode::element("div")
                    .with_child(t.item("p", "font-bold text-sm", "items", i, "author", &item.author))
                    .with_child(t.item(
                        "p",
                        "text-xs text-gray-500 uppercase tracking-wide",
                        "items",
                        i,
                        "role",
                        &item.role,
                    )),
            );

        VNode::element("div")
            .with_class("bg-gray-50/80 p-8 rounded-2xl relative")
            .with_child(stars)
            .with_child(t.item(
                "p",
                "text-lg italic text-gray-700 mb-6",
                "items",
                i,
                "quote",
                &item.quote,
            ))
            .with_child(person)
    });

    container()
        .with_child(t.title_row("text-center mb-16", "text-3xl md:text-4xl font-bold", &c.heading))
        .with_child(
            VNode::element("div")
                .with_class(classes(&["grid gap-8", t.grid_3()]))
                .with_children(cards),
        )
}

pub(crate) fn pricing(t: &Template, c: &PricingContent) -> VNode {
    let cards = c.plans.iter().enumerate().map(|(i, plan)| {
        let features = plan.features.iter().map(|feature| {
            VNode::element("div")
                .with_class("flex items-center gap-3 text-gray-600")
                .with_child(
                    VNode::element("span")
                        .with_class("w-5 h-5 rounded-full bg-green-100 text-green-600 flex items-center justify-center shrink-0")
                        .with_child(VNode::text("✓")),
                )
                .with_child(VNode::element("span").with_child(VNode::text(feature.as_str())))
        });

        VNode::element("div")
            .with_class("border border-gray-200 rounded-3xl p-8 hover:border-blue-500 hover:shadow-xl transition-all duration-300 flex flex-col bg-white")
            .with_child(t.item("h3", "text-lg font-medium text-gray-500 mb-2", "plans", i, "name", &plan.name))
            .with_child(t.item("div", "text-5xl font-bold mb-6", "plans", i, "price", &plan.price))
            .with_child(
                VNode::element("div")
                    .with_class("flex-1 space-y-3 mb-8")
                    .with_children(features),
            )
            .with_child(
                VNode::element("button")
                    .with_class("w-full py-3 rounded-xl border-2 border-blue-600 text-blue-600 font-bold hover:bg-blue-600 hover:text-white transition")
                    .with_child(VNode::text(format!("Choose {}", plan.name))),
            )
    });

    container()
        .with_child(t.title_row("text-center mb-16", "text-3xl md:text-4xl font-bold", &c.heading))
        .with_child(
            VNode::element("div")
                .with_class(classes(&["grid gap-8 max-w-6xl mx-auto", t.grid_3()]))
                .with_children(cards),
        )
}

pub(crate) fn faq(t: &Template, c: &FaqContent) -> VNode {
    let items = c.items.iter().enumerate().map(|(i, item)| {
        VNode::element("div")
            .with_class("border border-gray-200 rounded-xl p-6 bg-white/60")
            .with_child(
                VNode::element("div")
                    .with_class("flex justify-between items-center mb-2")
                    .with_child(t.item(
                        "h3",
                        "text-lg font-semibold pr-4",
                        "items",
                        i,
                        "question",
                        &item.question,
                    ))
                    .with_child(
                        VNode::element("span")
                            .with_class("text-gray-400")
                            .with_child(VNode::text("▼")),
                    ),
            )
            .with_child(t.item("p", "text-gray-600", "items", i, "answer", &item.answer))
    });

    VNode::element("div")
        .with_class("container mx-auto px-6 max-w-3xl")
        .with_child(t.title_row("text-center mb-12", "text-3xl font-bold", &c.heading))
        .with_child(VNode::element("div").with_class("space-y-4").with_children(items))
}

pub(crate) fn gallery(t: &Template, c: &GalleryContent) -> VNode {
    let tiles = c.images.iter().enumerate().map(|(i, src)| {
        VNode::element("div")
            .with_class("rounded-xl overflow-hidden aspect-square hover:opacity-90 transition cursor-pointer")
            .with_child(
                VNode::element("img")
                    .with_class("w-full h-full object-cover")
                    .with_attr("src", src.as_str())
                    .with_attr("alt", format!("Gallery {}", i)),
            )
    });

    container()
        .with_child(t.title_row("text-center mb-12", "text-3xl font-bold", &c.heading))
        .with_child(
            VNode::element("div")
                .with_class(classes(&["grid gap-4", t.grid_4()]))
                .with_children(tiles),
        )
}

pub(crate) fn team(t: &Template, c: &TeamContent) -> VNode {
    let members = c.members.iter().enumerate().map(|(i, member)| {
        VNode::element("div")
            .with_class("text-center")
            .with_child(
                VNode::element("div")
                    .with_class("w-32 h-32 mx-auto rounded-full overflow-hidden mb-4 border-4 border-white shadow-lg")
                    .with_child(
                        VNode::element("img")
                            .with_class("w-full h-full object-cover")
                            .with_attr("src", member.image.as_str())
                            .with_attr("alt", member.name.as_str()),
                    ),
            )
            .with_child(t.item("h3", "text-xl font-bold", "members", i, "name", &member.name))
            .with_child(t.item("p", "text-blue-600 font-medium", "members", i, "role", &member.role))
    });

    container()
        .with_child(t.title_row("text-center mb-16", "text-3xl font-bold", &c.heading))
        .with_child(
            VNode::element("div")
                .with_class(classes(&["grid gap-8", t.grid_4()]))
                .with_children(members),
        )
}

pub(crate) fn blog(t: &Template, c: &BlogContent) -> VNode {
    let posts = c.posts.iter().enumerate().map(|(i, post)| {
        VNode::element("article")
            .with_class("group cursor-pointer")
            .with_child(
                VNode::element("div")
                    .with_class("bg-gray-100 rounded-2xl aspect-video mb-6 overflow-hidden")
                    .with_child(
                        VNode::element("div")
                            .with_class("w-full h-full bg-gray-200 group-hover:scale-105 transition duration-500"),
                    ),
            )
            .with_child(t.item(
                "h3",
                "text-xl font-bold mb-2 group-hover:text-blue-600 transition",
                "posts",
                i,
                "title",
                &post.title,
            ))
            .with_child(t.item(
                "p",
                "text-gray-600 mb-4 line-clamp-2",
                "posts",
                i,
                "excerpt",
                &post.excerpt,
            ))
            .with_child(
                VNode::element("span")
                    .with_class("text-sm font-bold underline decoration-2 decoration-blue-200 group-hover:decoration-blue-600 transition-all")
                    .with_child(VNode::text("Read Article")),
            )
    });

    container()
        .with_child(t.title_row("text-center mb-16", "text-3xl font-bold", &c.heading))
        .with_child(
            VNode::element("div")
                .with_class(classes(&["grid gap-8", t.grid_3()]))
                .with_children(posts),
        )
}
