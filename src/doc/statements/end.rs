/*!
# `END`

## Purpose
Stop running the program and return to the prompt.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional.
Unlike `STOP`, there is nothing left for `CONT` to resume.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
RUN
HELLO
```

*/
