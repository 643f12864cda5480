use super::{Catalog, LocaleEntry};

pub struct AnalysisText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub dropzone_text: &'static str,
    pub supported_formats: &'static str,
    pub analyze_button: &'static str,
    pub analyzing_text: &'static str,
    pub results_title: &'static str,
    pub diagnosis_label: &'static str,
    pub tumor_size_label: &'static str,
    pub confidence_label: &'static str,
    pub circularity_label: &'static str,
    pub measurements_title: &'static str,
    pub perimeter_label: &'static str,
    pub width_label: &'static str,
    pub height_label: &'static str,
    pub retry_button: &'static str,
    pub zoom_label: &'static str,
    pub contrast_label: &'static str,
    pub compare_label: &'static str,
    pub share_label: &'static str,
    pub share_unsupported: &'static str,
    pub language_label: &'static str,
}

pub static ANALYSIS: Catalog<AnalysisText> = Catalog::new(&[
    LocaleEntry {
        code: "en",
        native_name: "English",
        text: AnalysisText {
            title: "Advanced Medical Image Analysis System",
            subtitle: "Upload a medical image for AI-powered diagnosis and insights",
            dropzone_text: "Drag & drop a medical image here, or click to select",
            supported_formats: "Supported formats: JPG, PNG and other browser-viewable images",
            analyze_button: "Analyze Image",
            analyzing_text: "Analyzing",
            results_title: "Analysis Results",
            diagnosis_label: "Diagnosis",
            tumor_size_label: "Tumor Size",
            confidence_label: "Confidence",
            circularity_label: "Circularity",
            measurements_title: "Additional Measurements",
            perimeter_label: "Perimeter",
            width_label: "Width",
            height_label: "Height",
            retry_button: "Analyze Another Image",
            zoom_label: "Zoom",
            contrast_label: "Adjust Contrast",
            compare_label: "Compare Images",
            share_label: "Share Results",
            share_unsupported: "Sharing is not supported on this device.",
            language_label: "Language",
        },
    },
    LocaleEntry {
        code: "es",
        native_name: "Español",
        text: AnalysisText {
            title: "Sistema Avanzado de Análisis de Imágenes Médicas",
            subtitle: "Sube una imagen médica para obtener diagnóstico e información con IA",
            dropzone_text: "Arrastra y suelta una imagen médica aquí, o haz clic para seleccionar",
            supported_formats: "Formatos soportados: JPG, PNG y otras imágenes visibles en el navegador",
            analyze_button: "Analizar Imagen",
            analyzing_text: "Analizando",
            results_title: "Resultados del Análisis",
            diagnosis_label: "Diagnóstico",
            tumor_size_label: "Tamaño del Tumor",
            confidence_label: "Confianza",
            circularity_label: "Circularidad",
            measurements_title: "Medidas Adicionales",
            perimeter_label: "Perímetro",
            width_label: "Ancho",
            height_label: "Alto",
            retry_button: "Analizar Otra Imagen",
            zoom_label: "Zoom",
            contrast_label: "Ajustar Contraste",
            compare_label: "Comparar Imágenes",
            share_label: "Compartir Resultados",
            share_unsupported: "Compartir no está disponible en este dispositivo.",
            language_label: "Idioma",
        },
    },
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hint_only_names_browser_images() {
        for entry in ANALYSIS.entries() {
            assert!(!entry.text.supported_formats.contains("DICOM"), "{}", entry.code);
            assert!(entry.text.supported_formats.contains("PNG"), "{}", entry.code);
        }
    }
}
