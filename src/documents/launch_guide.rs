//! "Guia de Lançamento": the seven launch stages, one per page.

use super::{closing, cover, items};
use crate::builder::DocumentBuilder;
use crate::error::DocumentError;
use crate::model::TableBlock;
use crate::richtext::Span;
use crate::theme::names::{BODY, H1, H2, TABLE, TIP};
use crate::theme::BrandTheme;

const STAGES: [(&str, &str); 7] = [
    ("1. Preparação", "Dia 1"),
    ("2. Configuração do App", "Dia 1-2"),
    ("3. Upload de Conteúdo", "Dia 2-3"),
    ("4. Integração de Pagamentos", "Dia 3"),
    ("5. Testes", "Dia 4"),
    ("6. Pré-lançamento", "Dia 5-6"),
    ("7. Lançamento!", "Dia 7"),
];

pub(super) fn write(document: &mut DocumentBuilder, theme: &BrandTheme) -> Result<(), DocumentError> {
    cover(
        document,
        "GUIA DE LANÇAMENTO",
        "Passo a passo para lançar seu app com sucesso",
        "R$147",
    )?;

    overview(document, theme)?;
    document.page_break();

    document.paragraph(H1, "ETAPA 1: PREPARAÇÃO")?;
    document.paragraph(TIP, "Tempo estimado: 2-3 horas")?;
    document.paragraph(H2, "O que você precisa ter pronto:")?;
    items(
        document,
        BODY,
        &[
            "• Logo da sua marca (PNG, fundo transparente, mínimo 512x512px)",
            "• Cores da sua marca (código hexadecimal, ex: #2563EB)",
            "• Nome do app (curto, memorável)",
            "• Descrição curta (1 frase sobre o que é)",
            "• Seu conteúdo organizado (aulas, PDFs, etc)",
        ],
    )?;
    document.paragraph(H2, "Checklist de conteúdo:")?;
    items(
        document,
        BODY,
        &[
            "[ ] Quantos módulos você terá?",
            "[ ] Quantas aulas por módulo?",
            "[ ] Vídeos já gravados e editados?",
            "[ ] PDFs/materiais de apoio prontos?",
            "[ ] Thumbnails das aulas?",
        ],
    )?;
    document.paragraph(
        TIP,
        "Dica: Não precisa ter TUDO pronto. Comece com pelo menos o primeiro módulo completo.",
    )?;
    document.page_break();

    document.paragraph(H1, "ETAPA 2: CONFIGURAÇÃO DO APP")?;
    document.paragraph(TIP, "Tempo estimado: 30-60 minutos")?;
    document.paragraph(H2, "Passo a passo:")?;
    document.paragraph(
        BODY,
        "**1. Acesse seu painel TribeBuild**\n\
         -> Vá em \"Meus Apps\" -> \"Criar Novo App\"\n\n\
         **2. Informações básicas**\n\
         -> Nome do app\n\
         -> Descrição curta\n\
         -> Categoria (educação, fitness, etc)\n\n\
         **3. Identidade visual**\n\
         -> Upload do logo\n\
         -> Cor primária (seu azul/verde/etc)\n\
         -> Cor secundária (para destaques)\n\n\
         **4. Configurações avançadas**\n\
         -> Idioma principal\n\
         -> Timezone\n\
         -> Domínio personalizado (opcional)",
    )?;
    document.paragraph(
        TIP,
        "Dica: Use cores que combinem com sua marca existente. Consistência gera confiança!",
    )?;
    document.page_break();

    document.paragraph(H1, "ETAPA 3: UPLOAD DE CONTEÚDO")?;
    document.paragraph(TIP, "Tempo estimado: 2-4 horas (depende da quantidade)")?;
    document.paragraph(H2, "Estrutura recomendada:")?;
    document.paragraph(
        BODY,
        "**Módulo de Boas-Vindas (obrigatório)**\n\
         -> Vídeo de boas-vindas (1-2 min)\n\
         -> Como usar o app (1-2 min)\n\
         -> O que esperar do curso\n\n\
         **Módulos de Conteúdo**\n\
         -> 3-7 aulas por módulo (ideal)\n\
         -> Aulas de 5-15 minutos (melhor retenção)\n\
         -> Material de apoio quando relevante\n\n\
         **Módulo Bônus (opcional, mas poderoso)**\n\
         -> Conteúdo extra exclusivo\n\
         -> Templates, checklists, etc\n\
         -> Aumenta valor percebido!",
    )?;
    document.paragraph(H2, "Boas práticas para upload:")?;
    items(
        document,
        BODY,
        &[
            "• Nomeie os arquivos de forma clara (ex: 01-introducao.mp4)",
            "• Use thumbnails atraentes",
            "• Escreva descrições que gerem curiosidade",
            "• Marque aulas gratuitas como 'preview' para atrair leads",
        ],
    )?;
    document.page_break();

    document.paragraph(H1, "ETAPA 4: INTEGRAÇÃO DE PAGAMENTOS")?;
    document.paragraph(TIP, "Tempo estimado: 15-30 minutos")?;
    document.paragraph(H2, "Como conectar sua plataforma:")?;
    document.paragraph(
        BODY,
        "**No TribeBuild:**\n\
         1. Vá em \"Integrações\"\n\
         2. Escolha sua plataforma (Kiwify, Hotmart, Eduzz, etc)\n\
         3. Copie a URL do Webhook\n\n\
         **Na sua plataforma de pagamento:**\n\
         1. Acesse configurações do produto\n\
         2. Procure \"Webhook\" ou \"Postback\"\n\
         3. Cole a URL do TribeBuild\n\
         4. Salve\n\n\
         **Teste:**\n\
         1. Faça uma compra teste (ou peça para alguém)\n\
         2. Verifique se o acesso foi liberado automaticamente\n\
         3. Se não funcionar, verifique a URL e tente novamente",
    )?;
    document.paragraph(
        TIP,
        "Dica: A maioria das plataformas processa o webhook em segundos. \
         Se demorar mais de 5 minutos, algo está errado.",
    )?;
    document.page_break();

    document.paragraph(H1, "ETAPA 5: TESTES")?;
    document.paragraph(TIP, "Tempo estimado: 1-2 horas")?;
    document.paragraph(H2, "Checklist de testes:")?;
    document.paragraph(
        BODY,
        "**Acesso:**\n\
         [ ] Login funciona?\n\
         [ ] Recuperação de senha funciona?\n\
         [ ] Novo usuário consegue se cadastrar?\n\n\
         **Conteúdo:**\n\
         [ ] Todos os vídeos carregam?\n\
         [ ] PDFs abrem corretamente?\n\
         [ ] Ordem das aulas está certa?\n\
         [ ] Progresso é salvo?\n\n\
         **App:**\n\
         [ ] Instala na tela inicial (iOS e Android)?\n\
         [ ] Notificações chegam?\n\
         [ ] Comunidade funciona?\n\
         [ ] Visual está bonito em diferentes telas?\n\n\
         **Pagamento:**\n\
         [ ] Compra teste libera acesso?\n\
         [ ] Email de boas-vindas é enviado?\n\
         [ ] Usuário consegue acessar após compra?",
    )?;
    document.paragraph(
        TIP,
        "Dica: Peça para 2-3 pessoas de confiança testarem. \
         Olhos frescos encontram bugs que você não vê.",
    )?;
    document.page_break();

    document.paragraph(H1, "ETAPA 6: PRÉ-LANÇAMENTO")?;
    document.paragraph(TIP, "Tempo estimado: 2-3 dias")?;
    document.paragraph(H2, "Aquecimento da audiência:")?;
    document.paragraph(
        BODY,
        "**Dia 1 - Curiosidade:**\n\
         -> Post: \"Estou preparando algo especial...\"\n\
         -> Stories: Bastidores sem revelar tudo\n\
         -> Objetivo: Gerar curiosidade\n\n\
         **Dia 2 - Revelação parcial:**\n\
         -> Revele do que se trata\n\
         -> Mostre um preview do app\n\
         -> Colete interessados (lista VIP)\n\n\
         **Dia 3 - Contagem regressiva:**\n\
         -> \"Amanhã abre!\"\n\
         -> Mostre depoimentos (se tiver betas)\n\
         -> Reforce a oferta de lançamento",
    )?;
    document.paragraph(H2, "Prepare seus materiais:")?;
    items(
        document,
        BODY,
        &[
            "[ ] Página de vendas revisada",
            "[ ] Emails de lançamento escritos",
            "[ ] Posts de redes sociais agendados",
            "[ ] Grupo/lista de lançamento pronta",
            "[ ] FAQ com objeções respondidas",
        ],
    )?;
    document.page_break();

    document.paragraph(H1, "ETAPA 7: LANÇAMENTO!")?;
    document.paragraph(TIP, "O grande dia chegou!")?;
    document.paragraph(H2, "Cronograma do dia:")?;
    document.paragraph(
        BODY,
        "**Manhã (8h-9h):**\n\
         -> Verifique se tudo está funcionando\n\
         -> Abra o carrinho/vendas\n\
         -> Envie email para lista VIP\n\n\
         **Manhã (9h-12h):**\n\
         -> Post de lançamento nas redes\n\
         -> Stories em sequência\n\
         -> Responda comentários rapidamente\n\n\
         **Tarde (14h-18h):**\n\
         -> Mais conteúdo nas redes\n\
         -> Lives/vídeos ao vivo\n\
         -> Responda DMs e dúvidas\n\n\
         **Noite (19h-22h):**\n\
         -> Último push de vendas\n\
         -> Lembrete de encerramento (se for oferta limitada)\n\
         -> Agradeça quem comprou",
    )?;
    document.paragraph(H2, "Após o lançamento:")?;
    items(
        document,
        BODY,
        &[
            "• Dê as boas-vindas aos novos alunos",
            "• Envie instruções de acesso ao app",
            "• Monitore o suporte nas primeiras 48h",
            "• Peça feedback e depoimentos",
            "• Comemore! Você merece!",
        ],
    )?;
    document.page_break();

    closing(
        document,
        "VOCÊ CONSEGUE!",
        "Siga o passo a passo e seu app estará no ar em 7 dias.",
        "Lembre-se: feito é melhor que perfeito!",
    )
}

fn overview(document: &mut DocumentBuilder, theme: &BrandTheme) -> Result<(), DocumentError> {
    document.paragraph(H1, "VISÃO GERAL DO LANÇAMENTO")?;
    document.paragraph(
        BODY,
        "Este guia vai te levar do zero ao app publicado em 7 etapas simples. \
         Siga na ordem e você terá seu app funcionando e vendendo em poucos dias!",
    )?;
    document.paragraph(H2, "As 7 Etapas:")?;

    let mut table = TableBlock::new(TABLE)
        .with_column_widths(vec![3.0, 1.0])
        .with_header(Some(theme.light))
        .with_grid(theme.footer, 0.5)
        .with_row([
            vec![Span::new("Etapa").colored(theme.primary)],
            vec![Span::new("Quando").colored(theme.primary)],
        ]);
    for (stage, day) in STAGES {
        table = table.with_text_row([stage, day]);
    }
    document.table(table);
    Ok(())
}
