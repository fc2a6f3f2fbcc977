//! Localized labels.

/// Languages with a label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
    Es,
    De,
    Ja,
    Ru,
    Pt,
    It,
    Nl,
}

/// Strings shown or logged by the share button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub share: &'static str,
    pub email: &'static str,
    pub sms: &'static str,
    pub copied: &'static str,
    pub error_init: &'static str,
    pub error_share: &'static str,
    pub error_copy: &'static str,
}

const EN: Labels = Labels {
    share: "Share",
    email: "Email",
    sms: "Messages",
    copied: "Link copied!",
    error_init: "Error initializing share button:",
    error_share: "Error during native sharing:",
    error_copy: "Error copying link:",
};

const FR: Labels = Labels {
    share: "Partager",
    email: "Email",
    sms: "Messages",
    copied: "Lien copié !",
    error_init: "Erreur d'initialisation du bouton de partage :",
    error_share: "Erreur lors du partage natif :",
    error_copy: "Erreur lors de la copie du lien :",
};

const ES: Labels = Labels {
    share: "Compartir",
    email: "Correo",
    sms: "Mensajes",
    copied: "¡Enlace copiado!",
    error_init: "Error al inicializar el botón de compartir:",
    error_share: "Error al compartir de forma nativa:",
    error_copy: "Error al copiar el enlace:",
};

const DE: Labels = Labels {
    share: "Teilen",
    email: "E-Mail",
    sms: "Nachrichten",
    copied: "Link kopiert!",
    error_init: "Fehler beim Initialisieren des Teilen-Buttons:",
    error_share: "Fehler beim nativen Teilen:",
    error_copy: "Fehler beim Kopieren des Links:",
};

const JA: Labels = Labels {
    share: "共有する",
    email: "メール",
    sms: "メッセージ",
    copied: "リンクがコピーされました！",
    error_init: "共有ボタンの初期化中にエラーが発生しました：",
    error_share: "ネイティブ共有中にエラーが発生しました：",
    error_copy: "リンクのコピー中にエラーが発生しました：",
};

const RU: Labels = Labels {
    share: "Поделиться",
    email: "Эл. почта",
    sms: "Сообщения",
    copied: "Ссылка скопирована!",
    error_init: "Ошибка инициализации кнопки общего доступа:",
    error_share: "Ошибка при нативном общем доступе:",
    error_copy: "Ошибка копирования ссылки:",
};

const PT: Labels = Labels {
    share: "Compartilhar",
    email: "Email",
    sms: "Mensagens",
    copied: "Link copiado!",
    error_init: "Erro ao inicializar o botão de compartilhamento:",
    error_share: "Erro ao compartilhar nativamente:",
    error_copy: "Erro ao copiar o link:",
};

const IT: Labels = Labels {
    share: "Condividi",
    email: "Email",
    sms: "Messaggi",
    copied: "Link copiato!",
    error_init: "Errore durante l'inizializzazione del pulsante di condivisione:",
    error_share: "Errore durante la condivisione nativa:",
    error_copy: "Errore durante la copia del link:",
};

const NL: Labels = Labels {
    share: "Delen",
    email: "E-mail",
    sms: "Berichten",
    copied: "Link gekopieerd!",
    error_init: "Fout bij het initialiseren van de deelknop:",
    error_share: "Fout bij native delen:",
    error_copy: "Fout bij het kopiëren van de link:",
};

impl Lang {
    /// Look up a language by its two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            "es" => Some(Lang::Es),
            "de" => Some(Lang::De),
            "ja" => Some(Lang::Ja),
            "ru" => Some(Lang::Ru),
            "pt" => Some(Lang::Pt),
            "it" => Some(Lang::It),
            "nl" => Some(Lang::Nl),
            _ => None,
        }
    }

    /// Pick the language from the element attribute, then the document
    /// language, then English.
    ///
    /// Only the first non-empty candidate is considered; an unsupported code
    /// falls back to English rather than to the next candidate.
    pub fn resolve(attr: Option<&str>, document_lang: Option<&str>) -> Self {
        attr.filter(|code| !code.is_empty())
            .or(document_lang.filter(|code| !code.is_empty()))
            .and_then(Self::from_code)
            .unwrap_or_default()
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Fr => &FR,
            Lang::Es => &ES,
            Lang::De => &DE,
            Lang::Ja => &JA,
            Lang::Ru => &RU,
            Lang::Pt => &PT,
            Lang::It => &IT,
            Lang::Nl => &NL,
        }
    }
}
