use serde::Serialize;

use super::format::{ColorScale, TooltipFormat};

/// Identifier column shared by every attribute table.
pub const TRACT_ID_COLUMN: &str = "tract_id";

/// The selectable mapping variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    TotalPopulation,
    PopulationDensity,
    ProjectedPopulationChange,
    MedianHouseholdIncome,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::TotalPopulation,
        Attribute::PopulationDensity,
        Attribute::ProjectedPopulationChange,
        Attribute::MedianHouseholdIncome,
    ];

    /// The single registered spec for this attribute.
    pub fn spec(self) -> &'static AttributeSpec {
        match self {
            Attribute::TotalPopulation => &ATTRIBUTE_TABLE[0],
            Attribute::PopulationDensity => &ATTRIBUTE_TABLE[1],
            Attribute::ProjectedPopulationChange => &ATTRIBUTE_TABLE[2],
            Attribute::MedianHouseholdIncome => &ATTRIBUTE_TABLE[3],
        }
    }

    #[inline] pub fn name(self) -> &'static str { self.spec().name }
}

/// Everything the pipeline and the renderer need to know about one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    pub attribute: Attribute,
    pub name: &'static str,
    /// Data-source relative path of the attribute table.
    pub source: &'static str,
    pub id_column: &'static str,
    pub value_column: &'static str,
    pub tooltip: TooltipFormat,
    pub color_scale: ColorScale,
    /// Colorbar tick format token, passed through to the renderer.
    pub colorbar_format: &'static str,
    pub legend_title: &'static str,
}

/// Renderer-facing subset of an `AttributeSpec`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayMeta {
    pub attribute: &'static str,
    pub color_scale: ColorScale,
    pub colorbar_format: &'static str,
    pub legend_title: &'static str,
}

impl AttributeSpec {
    pub fn display(&self) -> DisplayMeta {
        DisplayMeta {
            attribute: self.name,
            color_scale: self.color_scale,
            colorbar_format: self.colorbar_format,
            legend_title: self.legend_title,
        }
    }
}

/// Declarative attribute table, in dropdown order.
pub(crate) const ATTRIBUTE_TABLE: [AttributeSpec; 4] = [
    AttributeSpec {
        attribute: Attribute::TotalPopulation,
        name: "2023 Total Population",
        source: "attributes/total_population_2023.csv",
        id_column: TRACT_ID_COLUMN,
        value_column: "total_population",
        tooltip: TooltipFormat::Integer,
        color_scale: ColorScale::Blues,
        colorbar_format: ",.0f",
        legend_title: "Total Population",
    },
    AttributeSpec {
        attribute: Attribute::PopulationDensity,
        name: "2023 Population Density",
        source: "attributes/population_density_2023.csv",
        id_column: TRACT_ID_COLUMN,
        value_column: "population_density",
        tooltip: TooltipFormat::Decimal { places: 1, suffix: " / sq mi" },
        color_scale: ColorScale::Purples,
        colorbar_format: ",.1f",
        legend_title: "People per Sq. Mile",
    },
    AttributeSpec {
        attribute: Attribute::ProjectedPopulationChange,
        name: "2028 Projected Population Change",
        source: "attributes/population_change_2028.csv",
        id_column: TRACT_ID_COLUMN,
        value_column: "population_change",
        tooltip: TooltipFormat::Percent { places: 2 },
        color_scale: ColorScale::RdBu,
        colorbar_format: ".2%",
        legend_title: "Projected Change",
    },
    AttributeSpec {
        attribute: Attribute::MedianHouseholdIncome,
        name: "2023 Median Household Income",
        source: "attributes/median_household_income_2023.csv",
        id_column: TRACT_ID_COLUMN,
        value_column: "median_household_income",
        tooltip: TooltipFormat::Currency,
        color_scale: ColorScale::Greens,
        colorbar_format: "$,.0f",
        legend_title: "Median HH Income",
    },
];
