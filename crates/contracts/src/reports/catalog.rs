use super::descriptor::ReportDescriptor;
use crate::enums::{InputKind, OutputKind};

static CATALOG: [ReportDescriptor; 4] = [
    ReportDescriptor {
        id: "global",
        title: "Reporte Global Consolidado",
        description: "Información consolidada de todos los productores y sus costos de producción",
        audience: "Administrador",
        path: "/reporte/reporteglobal",
        output_kind: OutputKind::Spreadsheet,
        input: None,
        filename_stem: "reporte_global",
    },
    ReportDescriptor {
        id: "historico",
        title: "Histórico de Producción",
        description: "Gráfica del histórico de producción por finca para análisis temporal",
        audience: "Productor",
        path: "/reporte/historico/pdf",
        output_kind: OutputKind::Document,
        input: Some(InputKind::Farm),
        filename_stem: "historico",
    },
    ReportDescriptor {
        id: "top3",
        title: "Top 3 Productores",
        description: "Los 3 productores que más generan de un producto específico",
        audience: "Administrador",
        path: "/reporte/top3/top3",
        output_kind: OutputKind::Spreadsheet,
        input: Some(InputKind::Product),
        filename_stem: "top3",
    },
    ReportDescriptor {
        id: "costos",
        title: "Costos Agrupados",
        description: "Total de costos agrupados por productos para análisis financiero",
        audience: "Productor",
        path: "/reporte/costosagrupados/costos",
        output_kind: OutputKind::Spreadsheet,
        input: Some(InputKind::Farm),
        filename_stem: "costos_agrupados",
    },
];

/// All reports the dashboard offers, in display order
pub fn catalog() -> &'static [ReportDescriptor] {
    &CATALOG
}

pub fn find_report(id: &str) -> Option<&'static ReportDescriptor> {
    CATALOG.iter().find(|descriptor| descriptor.id == id)
}
