//! "Checklist de Configuração": every setup step, grouped in ten sections.

use super::{cover, signature};
use crate::builder::DocumentBuilder;
use crate::error::DocumentError;
use crate::theme::names::{BODY, H1, MAIN_TITLE, TIP};
use crate::units::cm;

/// A section heading followed by its checklist markup.
struct Section {
    title: &'static str,
    body: &'static str,
    /// What follows the section: `true` for a page break, `false` for a 1 cm gap.
    page_break: bool,
}

const SECTIONS: [Section; 10] = [
    Section {
        title: "1. CONTA E ACESSO",
        body: "[ ] Criar conta no TribeBuild\n\
               [ ] Confirmar email\n\
               [ ] Completar perfil (foto, nome, bio)\n\
               [ ] Configurar autenticação 2FA (segurança)\n\
               [ ] Salvar credenciais em local seguro",
        page_break: false,
    },
    Section {
        title: "2. CRIAÇÃO DO APP",
        body: "[ ] Clicar em \"Criar Novo App\"\n\
               [ ] Definir nome do app\n\
               [ ] Escrever descrição curta (até 100 caracteres)\n\
               [ ] Escrever descrição completa\n\
               [ ] Selecionar categoria principal\n\
               [ ] Definir idioma padrão",
        page_break: false,
    },
    Section {
        title: "3. IDENTIDADE VISUAL",
        body: "[ ] Upload do logo (512x512px mínimo, PNG)\n\
               [ ] Upload do ícone do app (192x192px)\n\
               [ ] Definir cor primária (código hex)\n\
               [ ] Definir cor secundária\n\
               [ ] Upload da imagem de capa/banner\n\
               [ ] Configurar splash screen\n\
               [ ] Revisar preview em diferentes dispositivos",
        page_break: true,
    },
    Section {
        title: "4. ESTRUTURA DE CONTEÚDO",
        body: "**Módulos:**\n\
               [ ] Criar módulo de boas-vindas\n\
               [ ] Criar módulos de conteúdo principal\n\
               [ ] Definir ordem dos módulos\n\
               [ ] Adicionar descrição em cada módulo\n\
               [ ] Adicionar thumbnail em cada módulo\n\n\
               **Aulas:**\n\
               [ ] Upload de todas as videoaulas\n\
               [ ] Adicionar títulos descritivos\n\
               [ ] Adicionar descrição/resumo\n\
               [ ] Definir duração de cada aula\n\
               [ ] Marcar aulas gratuitas (preview)\n\
               [ ] Adicionar materiais complementares\n\
               [ ] Verificar ordem das aulas",
        page_break: false,
    },
    Section {
        title: "5. COMUNIDADE (se aplicável)",
        body: "[ ] Ativar módulo de comunidade\n\
               [ ] Criar categorias/tópicos\n\
               [ ] Definir regras da comunidade\n\
               [ ] Criar post de boas-vindas\n\
               [ ] Configurar notificações\n\
               [ ] Definir moderadores (se houver)",
        page_break: true,
    },
    Section {
        title: "6. INTEGRAÇÕES DE PAGAMENTO",
        body: "[ ] Acessar área de integrações\n\
               [ ] Selecionar plataforma (Kiwify, Hotmart, etc)\n\
               [ ] Copiar URL do webhook\n\
               [ ] Colar webhook na plataforma de pagamento\n\
               [ ] Salvar configuração\n\
               [ ] Fazer compra teste\n\
               [ ] Verificar se acesso foi liberado\n\
               [ ] Verificar se email foi enviado",
        page_break: false,
    },
    Section {
        title: "7. NOTIFICAÇÕES",
        body: "[ ] Configurar notificação de boas-vindas\n\
               [ ] Configurar lembrete de aulas não assistidas\n\
               [ ] Configurar notificação de novo conteúdo\n\
               [ ] Testar envio de notificação\n\
               [ ] Verificar se chegou no celular",
        page_break: true,
    },
    Section {
        title: "8. TESTES FINAIS",
        body: "**Teste no celular (iOS):**\n\
               [ ] Acessar app pelo Safari\n\
               [ ] Adicionar à tela inicial\n\
               [ ] Abrir como app\n\
               [ ] Fazer login\n\
               [ ] Assistir uma aula\n\
               [ ] Verificar se progresso salvou\n\
               [ ] Testar notificação\n\n\
               **Teste no celular (Android):**\n\
               [ ] Acessar app pelo Chrome\n\
               [ ] Instalar app (prompt automático)\n\
               [ ] Abrir como app\n\
               [ ] Fazer login\n\
               [ ] Assistir uma aula\n\
               [ ] Verificar se progresso salvou\n\
               [ ] Testar notificação\n\n\
               **Teste de compra:**\n\
               [ ] Fazer compra teste\n\
               [ ] Verificar liberação automática\n\
               [ ] Verificar email de boas-vindas\n\
               [ ] Acessar como novo aluno",
        page_break: true,
    },
    Section {
        title: "9. PRÉ-LANÇAMENTO",
        body: "[ ] Revisar página de vendas\n\
               [ ] Verificar links de pagamento\n\
               [ ] Preparar emails de lançamento\n\
               [ ] Preparar posts de redes sociais\n\
               [ ] Avisar lista VIP\n\
               [ ] Definir data e hora de abertura\n\
               [ ] Configurar oferta de lançamento (se houver)",
        page_break: false,
    },
    Section {
        title: "10. DIA DO LANÇAMENTO",
        body: "[ ] Verificar se tudo está funcionando (manhã)\n\
               [ ] Abrir vendas/carrinho\n\
               [ ] Enviar email de lançamento\n\
               [ ] Publicar posts nas redes\n\
               [ ] Monitorar vendas e acessos\n\
               [ ] Responder dúvidas rapidamente\n\
               [ ] Dar boas-vindas aos novos alunos\n\
               [ ] Enviar instruções de acesso\n\
               [ ] Comemorar!",
        page_break: true,
    },
];

pub(super) fn write(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    cover(
        document,
        "CHECKLIST DE CONFIGURAÇÃO",
        "Nada esquecido, tudo funcionando",
        "R$97",
    )?;

    document.paragraph(H1, "COMO USAR ESTE CHECKLIST")?;
    document.paragraph(
        BODY,
        "Imprima este documento ou use no tablet/computador.\n\n\
         Marque cada item conforme for completando.\n\n\
         Não pule etapas - a ordem importa!\n\n\
         Ao final, você terá seu app 100% configurado e pronto para receber alunos.",
    )?;
    document.page_break();

    for section in &SECTIONS {
        document.paragraph(H1, section.title)?;
        document.paragraph(BODY, section.body)?;
        if section.page_break {
            document.page_break();
        } else {
            document.spacer(cm(1.0));
        }
    }

    document.spacer(cm(2.0));
    document.paragraph(MAIN_TITLE, "CHECKLIST COMPLETO!")?;
    document.spacer(cm(1.0));
    document.paragraph(
        BODY,
        "Se você marcou todos os itens, seu app está 100% configurado e pronto para receber alunos!",
    )?;
    document.spacer(cm(1.0));
    document.paragraph(
        TIP,
        "Guarde este checklist - ele serve para todos os seus próximos apps também!",
    )?;
    signature(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::parse_markup;

    #[test]
    fn every_section_body_is_valid_markup() {
        for section in &SECTIONS {
            assert!(parse_markup(section.body).is_ok(), "{}", section.title);
        }
    }
}
