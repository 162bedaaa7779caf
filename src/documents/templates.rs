//! "Templates Prontos": ready-to-use copy for emails, WhatsApp, product pages, social
//! posts and sales videos.

use super::{closing, cover, items};
use crate::builder::DocumentBuilder;
use crate::error::DocumentError;
use crate::theme::names::{BODY, H1, H2, TIP};

pub(super) fn write(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    cover(
        document,
        "TEMPLATES PRONTOS",
        "Copie, cole e personalize para seu negócio",
        "R$197",
    )?;

    document.paragraph(H1, "O QUE VOCÊ VAI ENCONTRAR")?;
    items(
        document,
        BODY,
        &[
            "1. Emails de Boas-Vindas (3 modelos)",
            "2. Mensagens de WhatsApp (5 modelos)",
            "3. Descrições de Produtos (3 modelos)",
            "4. Posts para Redes Sociais (5 modelos)",
            "5. Scripts de Vídeo de Vendas (2 modelos)",
        ],
    )?;
    document.page_break();

    emails(document)?;
    document.page_break();
    whatsapp(document)?;
    document.page_break();
    product_descriptions(document)?;
    document.page_break();
    social_posts(document)?;
    document.page_break();
    video_scripts(document)?;
    document.page_break();

    closing(
        document,
        "PARABÉNS!",
        "Você tem em mãos templates testados e aprovados.",
        "Agora é só personalizar e usar!",
    )
}

fn emails(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    document.paragraph(H1, "1. EMAILS DE BOAS-VINDAS")?;

    document.paragraph(H2, "Modelo 1: Boas-vindas Calorosas")?;
    document.paragraph(
        BODY,
        "**Assunto:** Bem-vindo(a) à família [NOME DO CURSO]!\n\n\
         Olá, [NOME]!\n\n\
         Que alegria ter você aqui! Você acabou de dar o primeiro passo para [TRANSFORMAÇÃO].\n\n\
         Seu acesso ao app já está liberado. Para começar:\n\
         1. Baixe o app: [LINK]\n\
         2. Faça login com este email\n\
         3. Comece pelo módulo \"Primeiros Passos\"\n\n\
         Qualquer dúvida, estou aqui!\n\n\
         Um abraço,\n\
         [SEU NOME]",
    )?;
    document.paragraph(
        TIP,
        "Dica: Personalize o campo [TRANSFORMAÇÃO] com o resultado principal do seu curso.",
    )?;

    document.paragraph(H2, "Modelo 2: Orientação de Início")?;
    document.paragraph(
        BODY,
        "**Assunto:** Por onde começar? Seu guia rápido está aqui\n\n\
         E aí, [NOME]!\n\n\
         Sei que às vezes bate aquela dúvida: \"Por onde começo?\"\n\n\
         Relaxa, preparei um caminho certeiro pra você:\n\n\
         **PASSO 1:** Instale o app na tela inicial do seu celular\n\
         **PASSO 2:** Assista a aula \"Bem-vindo\" (5 min)\n\
         **PASSO 3:** Complete o exercício do dia 1\n\n\
         Em 7 dias você já vai ver os primeiros resultados!\n\n\
         Bora?\n\
         [SEU NOME]",
    )?;

    document.paragraph(H2, "Modelo 3: Reengajamento (7 dias)")?;
    document.paragraph(
        BODY,
        "**Assunto:** [NOME], sentimos sua falta!\n\n\
         Oi, [NOME]!\n\n\
         Percebi que faz alguns dias que você não acessa o app.\n\n\
         Tudo bem por aí? Se tiver alguma dificuldade, me conta que eu ajudo!\n\n\
         Enquanto isso, deixei uma aula especial liberada pra você: [LINK DA AULA]\n\n\
         É sobre [TEMA INTERESSANTE] e dura só 8 minutos.\n\n\
         Te espero lá!\n\
         [SEU NOME]",
    )?;
    Ok(())
}

fn whatsapp(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    document.paragraph(H1, "2. MENSAGENS DE WHATSAPP")?;

    document.paragraph(H2, "Modelo 1: Confirmação de Compra")?;
    document.paragraph(
        BODY,
        "\\*Parabéns pela sua decisão, [NOME]!\\*\n\n\
         Seu acesso ao [NOME DO CURSO] já está liberado!\n\n\
         \\*Próximo passo:\\*\n\
         Acesse o app pelo link: [LINK]\n\n\
         Qualquer dúvida, é só me chamar aqui!\n\n\
         Bem-vindo(a) à família!",
    )?;

    document.paragraph(H2, "Modelo 2: Lembrete de Aula")?;
    document.paragraph(
        BODY,
        "Ei, [NOME]!\n\n\
         Só passando pra lembrar que tem aula nova no app!\n\n\
         \\*[NOME DA AULA]\\*\n\
         Duração: X minutos\n\n\
         Essa aula é sobre [TEMA] e vai te ajudar a [BENEFÍCIO].\n\n\
         Bora assistir?",
    )?;

    document.paragraph(H2, "Modelo 3: Pedido de Feedback")?;
    document.paragraph(
        BODY,
        "Oi, [NOME]! Tudo bem?\n\n\
         Vi que você já completou [X]% do curso!\n\n\
         Queria saber: o que você está achando até agora?\n\n\
         Seu feedback é super importante pra eu melhorar cada vez mais!\n\n\
         Me conta aí!",
    )?;

    document.paragraph(H2, "Modelo 4: Oferta de Upgrade")?;
    document.paragraph(
        BODY,
        "[NOME], tenho uma novidade!\n\n\
         Como você é aluno(a) do [CURSO BÁSICO], liberei uma condição especial pra você:\n\n\
         \\*[NOME DO UPGRADE]\\* com \\*30% OFF\\*!\n\n\
         • [Benefício 1]\n\
         • [Benefício 2]\n\
         • [Benefício 3]\n\n\
         Válido só até [DATA].\n\n\
         Quer saber mais? Me chama!",
    )?;

    document.paragraph(H2, "Modelo 5: Suporte Proativo")?;
    document.paragraph(
        BODY,
        "Oi, [NOME]!\n\n\
         Passando pra ver se está tudo ok com seu acesso ao app.\n\n\
         Se tiver qualquer dúvida sobre:\n\
         • Como acessar as aulas\n\
         • Como usar a comunidade\n\
         • Qualquer outra coisa\n\n\
         É só me chamar, tá? Estou aqui pra ajudar!",
    )?;
    Ok(())
}

fn product_descriptions(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    document.paragraph(H1, "3. DESCRIÇÕES DE PRODUTOS")?;

    document.paragraph(H2, "Modelo 1: Curso Online")?;
    document.paragraph(
        BODY,
        "**[NOME DO CURSO]**\n\n\
         Você está a um passo de [TRANSFORMAÇÃO PRINCIPAL].\n\n\
         **O que você vai aprender:**\n\
         • [Benefício 1 com resultado específico]\n\
         • [Benefício 2 com resultado específico]\n\
         • [Benefício 3 com resultado específico]\n\
         • [Benefício 4 com resultado específico]\n\n\
         **O que está incluso:**\n\
         • App exclusivo com sua marca\n\
         • [X] módulos com [Y] aulas\n\
         • Acesso à comunidade de alunos\n\
         • Notificações de novos conteúdos\n\
         • [Bônus especial]\n\n\
         **Para quem é:**\n\
         • [Perfil 1]\n\
         • [Perfil 2]\n\
         • [Perfil 3]\n\n\
         **Garantia:** 7 dias para testar. Se não gostar, devolvemos seu dinheiro.",
    )?;

    document.paragraph(H2, "Modelo 2: Mentoria")?;
    document.paragraph(
        BODY,
        "**Mentoria [NOME]**\n\n\
         Acompanhamento personalizado para você [RESULTADO].\n\n\
         **Como funciona:**\n\
         • [X] encontros ao vivo por mês\n\
         • App exclusivo com todo o conteúdo\n\
         • Grupo privado para dúvidas\n\
         • Tarefas semanais com feedback\n\n\
         **Resultados dos mentorados:**\n\
         \"[Depoimento 1]\" - Nome\n\
         \"[Depoimento 2]\" - Nome\n\n\
         **Vagas limitadas:** Apenas [X] vagas por turma.",
    )?;

    document.paragraph(H2, "Modelo 3: Comunidade/Assinatura")?;
    document.paragraph(
        BODY,
        "**Comunidade [NOME]**\n\n\
         O lugar onde [PÚBLICO-ALVO] se conectam para [OBJETIVO COMUM].\n\n\
         **O que você ganha como membro:**\n\
         • App exclusivo da comunidade\n\
         • Lives semanais sobre [TEMA]\n\
         • Biblioteca de conteúdos\n\
         • Networking com [X]+ membros\n\
         • Descontos em produtos e eventos\n\n\
         **Investimento:**\n\
         Apenas R$[X]/mês ou R$[Y]/ano (economia de R$[Z])\n\n\
         **Cancele quando quiser.** Sem multa, sem burocracia.",
    )?;
    Ok(())
}

fn social_posts(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    document.paragraph(H1, "4. POSTS PARA REDES SOCIAIS")?;

    document.paragraph(H2, "Modelo 1: Anúncio de Lançamento")?;
    document.paragraph(
        BODY,
        "É OFICIAL!\n\n\
         Depois de [X meses/anos] trabalhando nisso, finalmente posso anunciar:\n\n\
         [NOME DO PRODUTO] está no ar!\n\n\
         E o melhor: agora você acessa tudo pelo APP exclusivo!\n\n\
         • Seu celular vira sua sala de aula\n\
         • Notificações para nunca perder nada\n\
         • Comunidade direto no app\n\n\
         Link na bio para garantir sua vaga!\n\n\
         #lancamento #cursonline #[suanicho]",
    )?;

    document.paragraph(H2, "Modelo 2: Prova Social")?;
    document.paragraph(
        BODY,
        "Olha o que a [NOME] me mandou hoje\n\n\
         \"[Depoimento do aluno com resultado]\"\n\n\
         Isso me deixa TÃO feliz!\n\n\
         Ver meus alunos conquistando [RESULTADO] é o que me motiva a continuar.\n\n\
         Quer ser o(a) próximo(a)?\n\
         Link na bio!\n\n\
         #resultado #depoimento #transformacao",
    )?;

    document.paragraph(H2, "Modelo 3: Conteúdo de Valor + CTA")?;
    document.paragraph(
        BODY,
        "3 erros que [SEU PÚBLICO] comete e que impedem [RESULTADO]:\n\n\
         **Erro 1:** [Descreva o erro]\n\
         **Solução:** [Dê a solução]\n\n\
         **Erro 2:** [Descreva o erro]\n\
         **Solução:** [Dê a solução]\n\n\
         **Erro 3:** [Descreva o erro]\n\
         **Solução:** [Dê a solução]\n\n\
         Salva esse post!\n\n\
         E se quiser ir mais fundo, meu curso [NOME] tem um módulo inteiro sobre isso.\n\
         Link na bio!",
    )?;

    document.paragraph(H2, "Modelo 4: Stories - Bastidores")?;
    document.paragraph(
        BODY,
        "**Story 1:** \"Vocês pediram, eu ouvi!\"\n\
         **Story 2:** [Foto/vídeo dos bastidores]\n\
         **Story 3:** \"Estou preparando algo MUITO especial pra vocês...\"\n\
         **Story 4:** \"Quer saber primeiro? Me manda uma reação que eu te aviso!\"\n\
         **Story 5:** Enquete: \"Qual tema vocês querem que eu aborde primeiro?\"",
    )?;

    document.paragraph(H2, "Modelo 5: Oferta Relâmpago")?;
    document.paragraph(
        BODY,
        "OFERTA RELÂMPAGO\n\n\
         Só nas próximas [X] horas!\n\n\
         [NOME DO PRODUTO] com [X]% OFF\n\n\
         De R$[PREÇO CHEIO]\n\
         Por apenas R$[PREÇO COM DESCONTO]\n\n\
         + Bônus exclusivo: [NOME DO BÔNUS]\n\n\
         Termina hoje às [HORÁRIO]\n\n\
         Corre! Link na bio",
    )?;
    Ok(())
}

fn video_scripts(document: &mut DocumentBuilder) -> Result<(), DocumentError> {
    document.paragraph(H1, "5. SCRIPTS DE VÍDEO DE VENDAS")?;

    document.paragraph(H2, "Modelo 1: VSL Curta (3-5 min)")?;
    document.paragraph(
        BODY,
        "**[GANCHO - 0:00 a 0:15]**\n\
         \"Se você [DOR/PROBLEMA], esse vídeo pode mudar tudo pra você.\"\n\n\
         **[IDENTIFICAÇÃO - 0:15 a 0:45]**\n\
         \"Eu sei como é [DESCREVA A DOR]. Eu também já passei por isso. [SUA HISTÓRIA BREVE]\"\n\n\
         **[SOLUÇÃO - 0:45 a 1:30]**\n\
         \"Depois de [X TEMPO/EXPERIÊNCIA], descobri um método que [RESULTADO]. \
         E é exatamente isso que eu ensino no [NOME DO PRODUTO].\"\n\n\
         **[O QUE É - 1:30 a 2:30]**\n\
         \"O [NOME] é [DESCRIÇÃO]. Você vai aprender:\n\
         • [Módulo/Benefício 1]\n\
         • [Módulo/Benefício 2]\n\
         • [Módulo/Benefício 3]\"\n\n\
         **[DIFERENCIAL - 2:30 a 3:00]**\n\
         \"E o melhor: tudo isso em um APP EXCLUSIVO com a minha marca. \
         Você acessa do celular, recebe notificações, participa da comunidade...\"\n\n\
         **[PROVA - 3:00 a 3:30]**\n\
         \"Veja o que os alunos estão falando: [DEPOIMENTOS]\"\n\n\
         **[OFERTA - 3:30 a 4:00]**\n\
         \"Normalmente o investimento seria R$[PREÇO ALTO]. Mas hoje, você leva tudo isso \
         por apenas R$[PREÇO]. E ainda ganha [BÔNUS].\"\n\n\
         **[CTA - 4:00 a 4:30]**\n\
         \"Clica no botão abaixo e garante sua vaga agora. Lembre-se: você tem [X] dias de \
         garantia. Se não gostar, devolvo seu dinheiro.\"\n\n\
         **[URGÊNCIA - 4:30 a 5:00]**\n\
         \"Essa condição especial é por tempo limitado. Não deixa pra depois. \
         Clica agora e começa sua transformação hoje!\"",
    )?;

    document.paragraph(H2, "Modelo 2: Vídeo de Boas-Vindas (App)")?;
    document.paragraph(
        BODY,
        "**[ABERTURA - 0:00 a 0:10]**\n\
         \"E aí! Bem-vindo(a) ao seu app! Que bom ter você aqui!\"\n\n\
         **[ORIENTAÇÃO - 0:10 a 0:40]**\n\
         \"Deixa eu te mostrar rapidinho como funciona:\n\
         • Aqui embaixo você tem o menu principal\n\
         • Em 'Aulas' você encontra todo o conteúdo\n\
         • Em 'Comunidade' você pode interagir com outros alunos\n\
         • E em 'Perfil' você acompanha seu progresso\"\n\n\
         **[PRIMEIRO PASSO - 0:40 a 1:00]**\n\
         \"Minha sugestão: comece pela aula '[NOME DA PRIMEIRA AULA]'. Ela dura só [X] minutos \
         e vai te dar a base pra todo o resto.\"\n\n\
         **[ENCERRAMENTO - 1:00 a 1:15]**\n\
         \"Qualquer dúvida, me chama lá na comunidade ou no suporte. Bora começar? \
         Te vejo na primeira aula!\"",
    )?;
    Ok(())
}
