//! Built-in catalogs for the studio's portfolio and bespoke furniture pages.

use core_types::{CardSpan, Category, FurnitureCategory, ItemFlags};

use crate::{CatalogItem, CatalogStore, Result};

const LEAD: ItemFlags = ItemFlags::FEATURED.union(ItemFlags::SHOWCASE);

fn project(
    id: &str,
    title: &str,
    category: Category,
    location: &str,
    year: &str,
    image_count: usize,
) -> CatalogItem<Category> {
    let media = (1..=image_count).map(|n| format!("/portfolio/project-{id}-{n}.jpg"));
    CatalogItem::new(id, title, category, media)
        .with_location(location)
        .with_year(year)
}

pub fn portfolio() -> Result<CatalogStore<Category>> {
    CatalogStore::new(vec![
        project("01", "The Meridian Residence", Category::Residential, "Ahmedabad, Gujarat", "2024", 3)
            .with_description(
                "A luxury residence designed around natural light and open living. The interior flows seamlessly from public to private spaces, anchored by a double-height living room and bespoke joinery throughout.",
            )
            .with_span(CardSpan::Tall)
            .with_flags(LEAD),
        project("02", "Arbor Commercial Hub", Category::Commercial, "Surat, Gujarat", "2024", 2)
            .with_description(
                "A contemporary commercial complex that redefines the workplace. Biophilic design principles, collaborative zones, and a facade that changes character with the light.",
            )
            .with_flags(ItemFlags::SHOWCASE),
        project("03", "Casa Verde Villa", Category::Turnkey, "Vadodara, Gujarat", "2023", 3)
            .with_description(
                "Complete turnkey delivery of a 4-bedroom villa. From structural shell to final furnishing, every element was designed and executed in-house.",
            )
            .with_span(CardSpan::Wide)
            .with_flags(ItemFlags::SHOWCASE),
        project("04", "Studio Noir Office", Category::Commercial, "Ahmedabad, Gujarat", "2023", 2)
            .with_description(
                "A bold, dark-palette office interior for a creative agency. Custom millwork, acoustic panels, and dramatic pendant lighting create an atmosphere that fuels creativity.",
            )
            .with_span(CardSpan::Tall)
            .with_flags(ItemFlags::SHOWCASE),
        project("05", "Elm Street Facade", Category::FacadeExterior, "Rajkot, Gujarat", "2023", 2)
            .with_description(
                "A complete facade redesign that transformed a dated commercial building into a landmark. Perforated metal screens, warm timber accents, and precision lighting.",
            )
            .with_flags(ItemFlags::SHOWCASE),
        project("06", "The Oak Collection", Category::BespokeFurniture, "Ahmedabad, Gujarat", "2023", 3)
            .with_description(
                "A complete suite of bespoke furniture for a penthouse apartment. Solid oak dining table, custom shelving, and an upholstered headboard — all designed to proportion.",
            ),
        project("07", "Skyline Penthouse", Category::Residential, "Ahmedabad, Gujarat", "2023", 2)
            .with_description(
                "A penthouse renovation that opens the entire top floor to panoramic city views. Retractable glass walls, a rooftop terrace, and an interior palette of stone, brass, and linen.",
            )
            .with_span(CardSpan::Wide),
        project("08", "Heritage Haveli Restoration", Category::Renovation, "Vadodara, Gujarat", "2022", 2)
            .with_description(
                "A sensitive restoration of a 100-year-old haveli. Original stonework was preserved and restored, while modern amenities were seamlessly integrated.",
            )
            .with_span(CardSpan::Tall),
        project("09", "Riviera Resort Master Plan", Category::ArchitecturePlanning, "Kutch, Gujarat", "2022", 3)
            .with_description(
                "Master planning and architectural design for a boutique resort. Site-responsive design, local material palette, and passive cooling strategies throughout.",
            ),
        project("10", "Aura Clinic", Category::Commercial, "Rajkot, Gujarat", "2022", 2)
            .with_description(
                "A calming, precision-designed medical clinic. Clean geometry, soft lighting, and a material palette that balances clinical function with warmth.",
            ),
        project("11", "The Loft Apartment", Category::Renovation, "Surat, Gujarat", "2022", 2)
            .with_description(
                "Transformation of a bare concrete shell into a refined urban loft. Exposed services, polished floors, and a kitchen island that anchors the open plan.",
            ),
        project("12", "Modular Living Series", Category::BespokeFurniture, "Multiple Locations", "2022", 2)
            .with_description(
                "A collection of modular furniture systems designed for compact urban living. Adaptable, beautiful, and built to last.",
            )
            .with_span(CardSpan::Tall),
    ])
}

fn piece(
    id: &str,
    title: &str,
    category: FurnitureCategory,
    material: &str,
    span: CardSpan,
) -> CatalogItem<FurnitureCategory> {
    CatalogItem::new(
        id,
        title,
        category,
        [format!("/furniture/gallery-{id}.jpg")],
    )
    .with_material(material)
    .with_span(span)
}

pub fn furniture() -> Result<CatalogStore<FurnitureCategory>> {
    use FurnitureCategory::*;

    CatalogStore::new(vec![
        piece("01", "The Arch Headboard", BedsHeadboards, "Bouclé & Walnut", CardSpan::Tall),
        piece("02", "Stone Top Dining Table", DiningTables, "Calacatta Marble & Oak", CardSpan::Normal),
        piece("03", "Modular Sofa System", SofasSeating, "Linen & Brass", CardSpan::Normal),
        piece("04", "Fluted Walk-in Wardrobe", StorageWardrobes, "Lacquered MDF & Cane", CardSpan::Tall),
        piece("05", "Island Kitchen", KitchenJoinery, "Smoked Oak & Terrazzo", CardSpan::Wide),
        piece("06", "The Library Wall", OfficeStudy, "Solid Teak", CardSpan::Normal),
        piece("07", "Curved Armchair", SofasSeating, "Velvet & Beech", CardSpan::Normal),
        piece("08", "Platform Bed", BedsHeadboards, "Black Walnut", CardSpan::Wide),
        piece("09", "Open Shelving Unit", StorageWardrobes, "Powder-coated Steel & Glass", CardSpan::Tall),
    ])
}
