/*!
# `INPUT ["<prompt string>",]<variable>[,<variable>...]`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
The response is split at commas. Each field is read as a number
and assigned to the variables in order. Fields that are missing or
empty assign zero and extra fields are ignored. If any field is not
a number, `Malformed number` is reported and no variable changes.

## Example
```text
10 INPUT "HOW OLD ARE YOU? ", AGE
20 PRINT "NEXT YEAR YOU WILL BE ";AGE+1
RUN
HOW OLD ARE YOU? 41
NEXT YEAR YOU WILL BE 42
```

*/
