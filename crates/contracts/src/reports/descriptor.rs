use super::params::{underscore_whitespace, ReportParams};
use crate::enums::{InputKind, OutputKind};

/// Static description of one report the backend can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDescriptor {
    /// Unique id, also the key of the preview map
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Intended user ("Administrador" / "Productor")
    pub audience: &'static str,
    /// Backend path, appended to the configured base URL
    pub path: &'static str,
    pub output_kind: OutputKind,
    pub input: Option<InputKind>,
    /// Filename without parameter suffix and extension
    pub filename_stem: &'static str,
}

/// A report request resolved against the current parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub report_id: &'static str,
    pub output_kind: OutputKind,
    pub endpoint: String,
    pub filename: String,
}

impl ReportDescriptor {
    pub fn requires_input(&self) -> bool {
        self.input.is_some()
    }

    /// Full endpoint URL, with the parameter percent-encoded into the query
    pub fn endpoint(&self, base_url: &str, params: &ReportParams) -> String {
        let base = base_url.trim_end_matches('/');
        match self.input {
            None => format!("{}{}", base, self.path),
            Some(kind) => format!(
                "{}{}?{}={}",
                base,
                self.path,
                kind.query_param(),
                urlencoding::encode(params.value_of(kind))
            ),
        }
    }

    /// Client-side filename for the saved file
    pub fn filename(&self, params: &ReportParams) -> String {
        let extension = self.output_kind.extension();
        match self.input {
            None => format!("{}.{}", self.filename_stem, extension),
            Some(kind) => format!(
                "{}_{}.{}",
                self.filename_stem,
                underscore_whitespace(params.value_of(kind)),
                extension
            ),
        }
    }

    pub fn request(&self, base_url: &str, params: &ReportParams) -> ReportRequest {
        ReportRequest {
            report_id: self.id,
            output_kind: self.output_kind,
            endpoint: self.endpoint(base_url, params),
            filename: self.filename(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::catalog::find_report;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn test_endpoint_without_input() {
        let global = find_report("global").unwrap();
        assert_eq!(
            global.endpoint(BASE, &ReportParams::default()),
            "http://localhost:8000/reporte/reporteglobal"
        );
        assert_eq!(
            global.endpoint("http://localhost:8000/", &ReportParams::default()),
            "http://localhost:8000/reporte/reporteglobal"
        );
    }

    #[test]
    fn test_endpoint_encodes_parameter() {
        let params = ReportParams::new("Finca 1", "Café");
        assert_eq!(
            find_report("historico").unwrap().endpoint(BASE, &params),
            "http://localhost:8000/reporte/historico/pdf?nombre=Finca%201"
        );
        assert_eq!(
            find_report("top3").unwrap().endpoint(BASE, &params),
            "http://localhost:8000/reporte/top3/top3?producto=Caf%C3%A9"
        );
        assert_eq!(
            find_report("costos").unwrap().endpoint(BASE, &params),
            "http://localhost:8000/reporte/costosagrupados/costos?nombre=Finca%201"
        );
    }

    #[test]
    fn test_filenames() {
        let params = ReportParams::new("Finca 1", "Café");
        assert_eq!(find_report("global").unwrap().filename(&params), "reporte_global.xlsx");
        assert_eq!(
            find_report("historico").unwrap().filename(&params),
            "historico_Finca_1.pdf"
        );
        assert_eq!(find_report("top3").unwrap().filename(&params), "top3_Café.xlsx");
        assert_eq!(
            find_report("costos").unwrap().filename(&params),
            "costos_agrupados_Finca_1.xlsx"
        );
    }

    #[test]
    fn test_request_carries_kind() {
        let request = find_report("historico")
            .unwrap()
            .request(BASE, &ReportParams::new("Finca 2", ""));
        assert_eq!(request.report_id, "historico");
        assert_eq!(request.output_kind, OutputKind::Document);
        assert_eq!(request.filename, "historico_Finca_2.pdf");
    }
}
