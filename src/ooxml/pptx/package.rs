/// Package assembly for PowerPoint presentations.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Part};
use tracing::trace;

use super::template;
use super::writer::{MutablePresentation, SlideKind};

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

fn slide_layout_uri(index: usize) -> Result<PackURI> {
    Ok(PackURI::new(format!("/ppt/slideLayouts/slideLayout{}.xml", index))?)
}

fn slide_uri(index: usize) -> Result<PackURI> {
    Ok(PackURI::new(format!("/ppt/slides/slide{}.xml", index))?)
}

/// Assemble the OPC package for `pres`.
///
/// Parts are added in a fixed order and every relationship ID is allocated
/// before the XML that references it is generated.
pub(crate) fn build_package(pres: &MutablePresentation) -> Result<OpcPackage> {
    let mut package = OpcPackage::new();

    let pres_uri = PackURI::new(PRESENTATION_URI)?;
    let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
    let theme_uri = PackURI::new(THEME_URI)?;

    // presentation.xml references its rIds, so relate first and fill the
    // blob afterwards
    let mut pres_part = BlobPart::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
    let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
    let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());
    for index in 1..=pres.slide_count() {
        slide_rel_ids.push(pres_part.relate_to(&slide_uri(index)?, rt::SLIDE));
    }
    let pres_props_uri = PackURI::new(PRES_PROPS_URI)?;
    let table_styles_uri = PackURI::new(TABLE_STYLES_URI)?;
    pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
    pres_part.relate_to(&theme_uri, rt::THEME);
    pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
    pres_part.set_blob(
        pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
            .into_bytes(),
    );
    package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
    package.add_part(Box::new(pres_part));

    // Master relates to layouts as rId1..rId3 and the theme as rId4
    let mut master_part = BlobPart::new(
        master_uri.clone(),
        ct::PML_SLIDE_MASTER,
        template::default_slide_master_xml(),
    );
    for kind in SlideKind::ALL {
        master_part.relate_to(&slide_layout_uri(kind.layout_index())?, rt::SLIDE_LAYOUT);
    }
    master_part.relate_to(&theme_uri, rt::THEME);
    package.add_part(Box::new(master_part));

    for (kind, layout_xml) in SlideKind::ALL.iter().zip(template::all_slide_layouts()) {
        let mut layout_part = BlobPart::new(
            slide_layout_uri(kind.layout_index())?,
            ct::PML_SLIDE_LAYOUT,
            layout_xml,
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        package.add_part(Box::new(layout_part));
    }

    for (index, slide) in pres.slides().iter().enumerate() {
        let mut slide_part = BlobPart::new(slide_uri(index + 1)?, ct::PML_SLIDE, slide.to_xml()?);
        slide_part.relate_to(&slide_layout_uri(slide.kind().layout_index())?, rt::SLIDE_LAYOUT);
        trace!(slide = index + 1, layout = slide.kind().layout_name(), "added slide part");
        package.add_part(Box::new(slide_part));
    }

    package.add_part(Box::new(BlobPart::new(
        theme_uri,
        ct::OFC_THEME,
        template::default_theme_xml(),
    )));
    package.add_part(Box::new(BlobPart::new(
        pres_props_uri,
        ct::PML_PRES_PROPS,
        template::default_pres_props_xml(),
    )));
    package.add_part(Box::new(BlobPart::new(
        table_styles_uri,
        ct::PML_TABLE_STYLES,
        template::default_table_styles_xml(),
    )));

    let props = pres.properties();
    let core_uri = PackURI::new(CORE_PROPS_URI)?;
    package.relate_to(&core_uri, rt::CORE_PROPERTIES);
    package.add_part(Box::new(BlobPart::new(
        core_uri,
        ct::OPC_CORE_PROPERTIES,
        template::core_props_xml(props.title.as_deref(), props.creator.as_deref(), props.created)?,
    )));

    let app_uri = PackURI::new(APP_PROPS_URI)?;
    package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);
    package.add_part(Box::new(BlobPart::new(
        app_uri,
        ct::OFC_EXTENDED_PROPERTIES,
        template::app_props_xml(pres.slide_count())?,
    )));

    Ok(package)
}
