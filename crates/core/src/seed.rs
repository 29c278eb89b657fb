//! Built-in starter catalog used on first run.

use crate::types::{Category, Price, Product, ProductId};

fn seed_product(
    id: &str,
    name: &str,
    price: u64,
    category: Category,
    description: &str,
    image: &str,
    features: [&str; 3],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price),
        category,
        description: description.to_string(),
        image: image.to_string(),
        features: features.iter().map(ToString::to_string).collect(),
    }
}

/// The starter catalog: one or two products per category.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        seed_product(
            "1",
            "آيفون 15 برو ماكس",
            14_500,
            Category::Electronics,
            "أحدث هاتف من شركة آبل مع معالج A17 Pro القوي.",
            "https://picsum.photos/seed/iphone/600/400",
            ["شاشة 6.7 إنش", "كاميرا 48 ميجابكسل", "تيتانيوم"],
        ),
        seed_product(
            "2",
            "أريكة جلدية فاخرة",
            8_500,
            Category::Home,
            "أريكة مريحة وعصرية تناسب غرفة المعيشة الحديثة.",
            "https://picsum.photos/seed/sofa/600/400",
            ["جلد طبيعي", "مقاعد مريحة", "ضمان 5 سنوات"],
        ),
        seed_product(
            "3",
            "سيارة دفع رباعي عائلية",
            320_000,
            Category::Cars,
            "سيارة عائلية واسعة مع نظام أمان متقدم وكفاءة في استهلاك الوقود.",
            "https://picsum.photos/seed/car/600/400",
            ["7 مقاعد", "نظام ملاحة متطور", "توفير وقود"],
        ),
        seed_product(
            "4",
            "لابتوب للأعمال",
            12_000,
            Category::Electronics,
            "جهاز قوي للعمل والدراسة بتصميم نحيف وخفيف.",
            "https://picsum.photos/seed/laptop/600/400",
            ["معالج i7", "16GB RAM", "شاشة OLED"],
        ),
    ]
}
